//! Host shim and entry point.
//!
//! This binary stands in for the design tool's plugin runtime. It serves the
//! document from a JSON snapshot, reads UI messages as JSON lines from stdin,
//! and writes every outbound UI update as one JSON line to stdout.
//!
//! # Usage
//!
//! ```text
//! varexport <snapshot.json> [config=<file.toml>] [key=value ...]
//! ```
//!
//! Inline `key=value` pairs override values from the config file.
//!
//! # Message Flow
//!
//! ```text
//! stdin  {"type":"mode-selected","value":"1:1"}
//!   → UiMessage → Event → handle_event → Action
//! stdout {"cssFile":":root {…}","jsFile":"…","composeFile":"…","swiftuiFile":"…",
//!         "collections":{…},"modes":{…}}
//! stderr notifications and logs
//! ```
//!
//! Any error from the library is fatal: the shim logs it and exits non-zero,
//! the same way the host would crash the plugin.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use varexport::host::JsonSnapshot;
use varexport::{handle_event, Action, Config, Event, ExportError, Session, UiMessage};

/// Shim state wrapping the library session and the document it serves.
struct Shim {
    session: Session,
    source: JsonSnapshot,
}

impl Shim {
    /// Handles one event and executes the resulting actions.
    fn dispatch(&mut self, event: &Event, out: &mut impl Write) -> varexport::Result<()> {
        let actions = handle_event(&mut self.session, &self.source, event)?;
        tracing::debug!(action_count = actions.len(), "event handled successfully");
        for action in &actions {
            Self::execute_action(action, out)?;
        }
        Ok(())
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip_all)]
    fn execute_action(action: &Action, out: &mut impl Write) -> varexport::Result<()> {
        match action {
            Action::PostUiUpdate(update) => {
                let payload = serde_json::to_string(update)?;
                tracing::debug!(payload_len = payload.len(), "posting update to ui");
                writeln!(out, "{payload}")?;
                out.flush()?;
            }
            Action::Notify(message) => {
                tracing::debug!(message = %message, "notifying user");
                eprintln!("{message}");
            }
        }
        Ok(())
    }

    /// Maps one stdin line to an event. Unknown or malformed messages are ignored.
    fn map_message(line: &str) -> Option<Event> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match serde_json::from_str::<UiMessage>(line) {
            Ok(message) => Some(Event::from(message)),
            Err(e) => {
                tracing::debug!(error = %e, payload_len = line.len(), "ignoring unrecognized ui message");
                None
            }
        }
    }
}

/// Splits `key=value` arguments into the snapshot path and a config map.
fn parse_args(args: impl Iterator<Item = String>) -> varexport::Result<(String, BTreeMap<String, String>)> {
    let mut snapshot = None;
    let mut pairs = BTreeMap::new();

    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) => {
                pairs.insert(key.trim().to_string(), value.trim().to_string());
            }
            None if snapshot.is_none() => snapshot = Some(arg),
            None => return Err(ExportError::Config(format!("unexpected argument: {arg}"))),
        }
    }

    let snapshot = snapshot.ok_or_else(|| {
        ExportError::Config("usage: varexport <snapshot.json> [config=<file.toml>] [key=value ...]".to_string())
    })?;
    Ok((snapshot, pairs))
}

fn load_config(pairs: &BTreeMap<String, String>) -> varexport::Result<Config> {
    let base = match pairs.get("config") {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    Ok(base.with_overrides(pairs))
}

fn run() -> varexport::Result<()> {
    let (snapshot_path, pairs) = parse_args(std::env::args().skip(1))?;
    let config = load_config(&pairs)?;
    varexport::observability::init_tracing(&config);

    let span = tracing::debug_span!("plugin_load");
    let guard = span.enter();
    tracing::debug!(snapshot = %snapshot_path, config = ?config, "parsed configuration");

    let mut shim = Shim {
        session: varexport::initialize(&config),
        source: JsonSnapshot::from_file(&snapshot_path)?,
    };
    drop(guard);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    shim.dispatch(&Event::Init, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if let Some(event) = Shim::map_message(&line) {
            shim.dispatch(&event, &mut out)?;
        }
    }

    tracing::debug!("ui channel closed");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "plugin execution failed");
            eprintln!("varexport: {e}");
            ExitCode::FAILURE
        }
    }
}
