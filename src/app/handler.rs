//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point the host shim calls. It processes
//! one event to completion, including any host lookups and the full regeneration,
//! before returning. Events are therefore never interleaved.
//!
//! # Transitions
//!
//! ```text
//! Uninitialized ── Init ──► Ready ──┬─ CollectionSelected(id) ─► Ready
//!                                    ├─ ModeSelected(id) ───────► Ready
//!                                    ├─ CodeCopied(target) ─────► Ready (no change)
//!                                    └─ Init ───────────────────► Ready (reload)
//! ```
//!
//! # Example
//!
//! ```rust
//! use varexport::app::{handle_event, Action, Event, Session};
//! use varexport::host::JsonSnapshot;
//!
//! let source = JsonSnapshot::default();
//! let mut session = Session::default();
//! let actions = handle_event(&mut session, &source, &Event::Init)?;
//! assert!(matches!(actions.as_slice(), [Action::PostUiUpdate(_)]));
//! # Ok::<(), varexport::ExportError>(())
//! ```

use crate::app::messages::UiMessage;
use crate::app::state::{SelectionState, Session};
use crate::app::Action;
use crate::codegen::Target;
use crate::domain::error::{ExportError, Result};
use crate::host::{list_collections, modes_of_collection, VariableSource};

/// Events driving the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Load everything from the host, select the first collection and mode,
    /// and generate.
    Init,

    /// A generated document was copied to the clipboard.
    CodeCopied(Target),

    /// The user picked a collection. `None` and empty ids are rejected.
    CollectionSelected(Option<String>),

    /// The user picked a mode of the current collection.
    ModeSelected(String),
}

impl From<UiMessage> for Event {
    fn from(message: UiMessage) -> Self {
        match message {
            UiMessage::CodeCopiedCss => Self::CodeCopied(Target::Css),
            UiMessage::CodeCopiedJs => Self::CodeCopied(Target::Js),
            UiMessage::CodeCopiedCompose => Self::CodeCopied(Target::Compose),
            UiMessage::CodeCopiedSwiftui => Self::CodeCopied(Target::Swiftui),
            UiMessage::CollectionSelected { value } => Self::CollectionSelected(value),
            UiMessage::ModeSelected { value } => Self::ModeSelected(value),
        }
    }
}

/// Notification text shown after a document was copied.
#[must_use]
pub fn copied_notification(target: Target) -> String {
    format!("{} variables successfully copied to clipboard", target.label())
}

fn initialize(session: &mut Session, source: &dyn VariableSource) -> Result<Vec<Action>> {
    let variables = source.local_variables()?;
    let collections = list_collections(source, &variables)?;
    let modes = match collections.keys().next() {
        Some(first) => modes_of_collection(source, first)?,
        None => indexmap::IndexMap::new(),
    };

    tracing::info!(
        variable_count = variables.len(),
        collection_count = collections.len(),
        mode_count = modes.len(),
        "document loaded"
    );

    let next = SelectionState::initial(variables, collections, modes);
    Ok(vec![Action::PostUiUpdate(session.commit(next)?)])
}

fn select_collection(
    session: &mut Session,
    source: &dyn VariableSource,
    value: Option<&str>,
) -> Result<Vec<Action>> {
    let collection_id = value
        .filter(|id| !id.is_empty())
        .ok_or(ExportError::NoCollectionSelected)?;
    let current = session.selection().ok_or(ExportError::NotInitialized)?;

    // Unknown ids must not reach the host.
    current.ensure_collection(collection_id)?;

    let modes = modes_of_collection(source, collection_id)?;
    let next = current.with_collection(collection_id, modes)?;

    tracing::debug!(collection_id = %collection_id, mode = ?next.mode(), "collection selected");
    Ok(vec![Action::PostUiUpdate(session.commit(next)?)])
}

fn select_mode(session: &mut Session, mode_id: &str) -> Result<Vec<Action>> {
    let current = session.selection().ok_or(ExportError::NotInitialized)?;
    let next = current.with_mode(mode_id)?;

    tracing::debug!(mode_id = %mode_id, "mode selected");
    Ok(vec![Action::PostUiUpdate(session.commit(next)?)])
}

/// Processes an event, advances the session, and returns actions to execute.
///
/// # Errors
///
/// - [`ExportError::NoCollectionSelected`] for a null or empty collection id
/// - [`ExportError::NotInitialized`] for a selection before `Init`
/// - [`ExportError::UnknownCollection`] / [`ExportError::UnknownMode`] for ids
///   outside the current pickers
/// - Any host or generation failure
///
/// On error the session keeps its previous selection and nothing is published.
pub fn handle_event(
    session: &mut Session,
    source: &dyn VariableSource,
    event: &Event,
) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Init => initialize(session, source),
        Event::CodeCopied(target) => {
            tracing::debug!(format = %target, "code copied");
            Ok(vec![Action::Notify(copied_notification(*target))])
        }
        Event::CollectionSelected(value) => select_collection(session, source, value.as_deref()),
        Event::ModeSelected(mode_id) => select_mode(session, mode_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_message() {
        assert_eq!(Event::from(UiMessage::CodeCopiedSwiftui), Event::CodeCopied(Target::Swiftui));
        assert_eq!(
            Event::from(UiMessage::CollectionSelected { value: None }),
            Event::CollectionSelected(None)
        );
        assert_eq!(
            Event::from(UiMessage::ModeSelected { value: "m1".into() }),
            Event::ModeSelected("m1".into())
        );
    }

    #[test]
    fn test_copied_notification() {
        assert_eq!(
            copied_notification(Target::Js),
            "JavaScript variables successfully copied to clipboard"
        );
        assert_eq!(
            copied_notification(Target::Swiftui),
            "SwiftUI variables successfully copied to clipboard"
        );
    }
}
