//! Varexport: the core of a design-tool plugin that exports design variables as code.
//!
//! Varexport reads the color and number variables of a design document and
//! provides:
//! - Collection and mode pickers (for example light and dark)
//! - Mode-aware value resolution with one level of alias indirection
//! - Four deterministic code snippets: CSS custom properties, a JavaScript
//!   constants module, a Jetpack Compose object, and a SwiftUI struct
//! - Clipboard-copy acknowledgements for the UI
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Shim (main.rs)                                │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Immutable selection snapshots                    │
//! │  - UI wire messages                                 │
//! └─────────────────────────────────────────────────────┘
//!              │                             │
//! ┌───────────────────────────┐   ┌─────────────────────────┐
//! │ Code Generation (codegen/)│   │ Host Data (host/)       │
//! │ - Resolver, color codec   │   │ - VariableSource trait  │
//! │ - Name transformers       │   │ - JSON snapshot         │
//! │ - CSS/JS/Compose/SwiftUI  │   │                         │
//! └───────────────────────────┘   └─────────────────────────┘
//!              │                             │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): variables, values, errors        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state machine with event/action model
//! - [`codegen`]: Resolution and the four emitters
//! - [`domain`]: Core domain types (Variable, errors)
//! - [`host`]: Host data interface and the JSON snapshot source
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! The host hands configuration over as string pairs:
//!
//! ```text
//! trace_level    = "debug"
//! inline_aliases = "true"
//! ```
//!
//! The same keys can be put in a TOML file, see [`Config::from_file`].
//!
//! # Example
//!
//! ```rust
//! use varexport::{handle_event, initialize, Action, Config, Event};
//! use varexport::host::JsonSnapshot;
//!
//! let source = JsonSnapshot::from_json(r#"{
//!     "collections": [{ "id": "c1", "name": "Theme", "modes": [{ "modeId": "m1", "name": "Light" }] }],
//!     "variables": [{
//!         "id": "v1", "name": "Colors/Primary", "resolvedType": "COLOR",
//!         "variableCollectionId": "c1",
//!         "valuesByMode": { "m1": { "r": 1, "g": 0, "b": 0, "a": 1 } }
//!     }]
//! }"#)?;
//!
//! let mut session = initialize(&Config::default());
//! let actions = handle_event(&mut session, &source, &Event::Init)?;
//! if let [Action::PostUiUpdate(update)] = actions.as_slice() {
//!     assert!(update.css_file.contains("--colors-primary: #FF0000FF;"));
//! }
//! # Ok::<(), varexport::ExportError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod codegen;
pub mod domain;
pub mod host;

pub mod observability;

pub use app::{handle_event, Action, Event, Session, UiMessage, UiUpdate};
pub use codegen::{GenerateOptions, Target};
pub use domain::{ExportError, Result};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Plugin configuration.
///
/// # Example
///
/// ```toml
/// trace_level = "debug"
/// inline_aliases = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Render aliases as the target's literal value instead of a reference.
    ///
    /// Default: `false`
    pub inline_aliases: bool,
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Parses configuration from the host's key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `trace_level`: String → `Option<String>`
    /// - `inline_aliases`: `true|yes|on|1` / `false|no|off|0` → `bool`
    ///   (falls back to `false` on parse error)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use varexport::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("inline_aliases".to_string(), "yes".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert!(config.inline_aliases);
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self::default().with_overrides(config)
    }

    /// Applies key/value overrides on top of this configuration.
    ///
    /// Keys that are absent or fail to parse leave the current value unchanged.
    #[must_use]
    pub fn with_overrides(mut self, config: &BTreeMap<String, String>) -> Self {
        if let Some(level) = config.get("trace_level") {
            self.trace_level = Some(level.clone());
        }
        if let Some(inline) = config.get("inline_aliases") {
            match parse_bool(inline) {
                Some(value) => self.inline_aliases = value,
                None => tracing::debug!(value = %inline, "ignoring unparsable inline_aliases"),
            }
        }
        self
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is invalid or contains unknown keys
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Generation options derived from this configuration.
    #[must_use]
    pub const fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            inline_aliases: self.inline_aliases,
        }
    }
}

/// Creates an uninitialized session for `config`.
///
/// The session becomes ready once the shim sends [`Event::Init`].
#[must_use]
pub fn initialize(config: &Config) -> Session {
    tracing::debug!(inline_aliases = config.inline_aliases, "initializing variable export session");
    Session::new(config.generate_options())
}
