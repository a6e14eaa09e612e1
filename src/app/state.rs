//! Session state and the immutable selection snapshot.
//!
//! A [`Session`] moves from `Uninitialized` to `Ready` on the first `Init` event
//! and stays `Ready` for the rest of the plugin's life. While ready it holds one
//! [`SelectionState`]: the loaded variables, the collection and mode pickers,
//! and the active collection and mode. Transitions never mutate a selection in
//! place. They build a new one and swap it in only after generation succeeded.
//!
//! # Invariants
//!
//! - `collection` is a key of `collections`, or `None` when there are none
//! - `mode` is a key of `modes`, and `modes` belongs to `collection`
//!
//! # Example
//!
//! ```rust
//! use indexmap::IndexMap;
//! use varexport::app::SelectionState;
//!
//! let mut collections = IndexMap::new();
//! collections.insert("c1".to_string(), "Theme".to_string());
//! let mut modes = IndexMap::new();
//! modes.insert("light".to_string(), "Light".to_string());
//! modes.insert("dark".to_string(), "Dark".to_string());
//!
//! let selection = SelectionState::initial(vec![], collections, modes);
//! assert_eq!(selection.collection(), Some("c1"));
//! assert_eq!(selection.mode(), Some("light"));
//!
//! let dark = selection.with_mode("dark")?;
//! assert_eq!(dark.mode(), Some("dark"));
//! assert_eq!(selection.mode(), Some("light"));
//! # Ok::<(), varexport::ExportError>(())
//! ```

use crate::app::messages::UiUpdate;
use crate::codegen::{self, GenerateOptions, GeneratedFiles};
use crate::domain::error::{ExportError, Result};
use crate::domain::Variable;
use indexmap::IndexMap;
use std::sync::Arc;

/// Immutable snapshot of everything a generation pass depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    variables: Arc<[Variable]>,
    collections: IndexMap<String, String>,
    modes: IndexMap<String, String>,
    collection: Option<String>,
    mode: Option<String>,
}

impl SelectionState {
    /// Builds the first selection after loading: the first collection and the
    /// first of its modes are selected.
    ///
    /// `modes` must be the modes of the first collection.
    #[must_use]
    pub fn initial(
        variables: Vec<Variable>,
        collections: IndexMap<String, String>,
        modes: IndexMap<String, String>,
    ) -> Self {
        let collection = collections.keys().next().cloned();
        let mode = modes.keys().next().cloned();
        Self {
            variables: Arc::from(variables),
            collections,
            modes,
            collection,
            mode,
        }
    }

    /// Returns a new selection with `collection_id` active and the first of
    /// `modes` selected.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnknownCollection`] if the id is not one of the
    /// available collections.
    pub fn with_collection(
        &self,
        collection_id: &str,
        modes: IndexMap<String, String>,
    ) -> Result<Self> {
        self.ensure_collection(collection_id)?;

        Ok(Self {
            variables: Arc::clone(&self.variables),
            collections: self.collections.clone(),
            mode: modes.keys().next().cloned(),
            modes,
            collection: Some(collection_id.to_string()),
        })
    }

    /// Checks that `collection_id` is one of the available collections.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnknownCollection`] otherwise.
    pub fn ensure_collection(&self, collection_id: &str) -> Result<()> {
        if self.collections.contains_key(collection_id) {
            Ok(())
        } else {
            Err(ExportError::UnknownCollection(collection_id.to_string()))
        }
    }

    /// Returns a new selection with `mode_id` active.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnknownMode`] if the id is not a mode of the
    /// selected collection.
    pub fn with_mode(&self, mode_id: &str) -> Result<Self> {
        if !self.modes.contains_key(mode_id) {
            return Err(ExportError::UnknownMode {
                mode: mode_id.to_string(),
                collection: self.collection.clone(),
            });
        }

        Ok(Self {
            mode: Some(mode_id.to_string()),
            ..self.clone()
        })
    }

    /// All loaded variables.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Available collections, id to display name.
    #[must_use]
    pub const fn collections(&self) -> &IndexMap<String, String> {
        &self.collections
    }

    /// Modes of the selected collection, id to display name.
    #[must_use]
    pub const fn modes(&self) -> &IndexMap<String, String> {
        &self.modes
    }

    /// Selected collection id.
    #[must_use]
    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    /// Selected mode id.
    #[must_use]
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// Runs a generation pass for this selection.
    ///
    /// # Errors
    ///
    /// Propagates generation failures.
    pub fn generate(&self, options: GenerateOptions) -> Result<GeneratedFiles> {
        codegen::generate(&self.variables, self.collection(), self.mode(), options)
    }

    /// Runs a generation pass and packages it with the picker contents.
    ///
    /// # Errors
    ///
    /// Propagates generation failures.
    pub fn ui_update(&self, options: GenerateOptions) -> Result<UiUpdate> {
        let files = self.generate(options)?;
        Ok(UiUpdate::new(files, self.collections.clone(), self.modes.clone()))
    }
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No data has been loaded yet.
    Uninitialized,
    /// Variables are loaded and a selection is active.
    Ready(SelectionState),
}

/// Central session container driven by [`crate::app::handle_event`].
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    options: GenerateOptions,
}

impl Session {
    /// Creates an uninitialized session.
    #[must_use]
    pub const fn new(options: GenerateOptions) -> Self {
        Self {
            state: SessionState::Uninitialized,
            options,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Active selection, once the session is ready.
    #[must_use]
    pub const fn selection(&self) -> Option<&SelectionState> {
        match &self.state {
            SessionState::Ready(selection) => Some(selection),
            SessionState::Uninitialized => None,
        }
    }

    /// Generation options applied on every pass.
    #[must_use]
    pub const fn options(&self) -> GenerateOptions {
        self.options
    }

    /// Generates for `next` and, on success, makes it the active selection.
    ///
    /// On failure the previous state is left untouched.
    pub(crate) fn commit(&mut self, next: SelectionState) -> Result<UiUpdate> {
        let update = next.ui_update(self.options)?;
        self.state = SessionState::Ready(next);
        Ok(update)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GenerateOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResolvedType, VariableValue};

    fn map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn selection() -> SelectionState {
        SelectionState::initial(
            vec![Variable::new("v1", "Spacing/Small", ResolvedType::Float, "c1")
                .with_value("m1", VariableValue::Number(8.0))
                .with_value("m2", VariableValue::Number(16.0))],
            map(&[("c1", "Theme"), ("c2", "Other")]),
            map(&[("m1", "Compact"), ("m2", "Comfortable")]),
        )
    }

    #[test]
    fn test_initial_selects_first_entries() {
        let state = selection();
        assert_eq!(state.collection(), Some("c1"));
        assert_eq!(state.mode(), Some("m1"));
    }

    #[test]
    fn test_initial_empty_document() {
        let state = SelectionState::initial(vec![], IndexMap::new(), IndexMap::new());
        assert_eq!(state.collection(), None);
        assert_eq!(state.mode(), None);

        let files = state.generate(GenerateOptions::default()).unwrap();
        assert_eq!(files.css, ":root {\n}");
        assert_eq!(files.js, "");
    }

    #[test]
    fn test_with_collection_resets_mode() {
        let state = selection().with_mode("m2").unwrap();
        let next = state
            .with_collection("c2", map(&[("x1", "Only")]))
            .unwrap();
        assert_eq!(next.collection(), Some("c2"));
        assert_eq!(next.mode(), Some("x1"));
        assert_eq!(next.modes().len(), 1);
    }

    #[test]
    fn test_with_unknown_collection() {
        let result = selection().with_collection("nope", IndexMap::new());
        assert!(matches!(result, Err(ExportError::UnknownCollection(id)) if id == "nope"));
    }

    #[test]
    fn test_with_mode() {
        let state = selection();
        let next = state.with_mode("m2").unwrap();
        assert_eq!(next.mode(), Some("m2"));
        assert!(next.generate(GenerateOptions::default()).unwrap().css.contains("16px"));

        assert!(matches!(state.with_mode("m9"), Err(ExportError::UnknownMode { .. })));
    }

    #[test]
    fn test_session_commit() {
        let mut session = Session::default();
        assert_eq!(session.state(), &SessionState::Uninitialized);
        assert!(session.selection().is_none());

        let update = session.commit(selection()).unwrap();
        assert!(update.css_file.contains("--spacing-small: 8px;"));
        assert_eq!(session.selection().and_then(SelectionState::mode), Some("m1"));
    }
}
