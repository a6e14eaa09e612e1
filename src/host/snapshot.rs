//! JSON file-based document snapshot.
//!
//! [`JsonSnapshot`] serves the [`VariableSource`] interface from a JSON export of
//! the host document. It is what the standalone binary uses in place of the live
//! plugin runtime, and it keeps the whole document in memory after loading.
//!
//! # File Format
//!
//! ```json
//! {
//!   "collections": [
//!     {
//!       "id": "VariableCollectionId:1:0",
//!       "name": "Theme",
//!       "modes": [{ "modeId": "1:0", "name": "Light" }]
//!     }
//!   ],
//!   "variables": [
//!     {
//!       "id": "VariableID:1:2",
//!       "name": "Colors/Primary",
//!       "resolvedType": "COLOR",
//!       "variableCollectionId": "VariableCollectionId:1:0",
//!       "valuesByMode": { "1:0": { "r": 1, "g": 0, "b": 0, "a": 1 } }
//!     }
//!   ]
//! }
//! ```

use crate::domain::error::Result;
use crate::domain::{Collection, Variable};
use crate::host::source::VariableSource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// In-memory document snapshot loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonSnapshot {
    /// Every variable collection of the document.
    #[serde(default)]
    pub collections: Vec<Collection>,

    /// Every local variable of the document.
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl JsonSnapshot {
    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not a valid snapshot document
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use varexport::host::JsonSnapshot;
    ///
    /// let snapshot = JsonSnapshot::from_file("variables.json")?;
    /// # Ok::<(), varexport::ExportError>(())
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading document snapshot");

        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;

        tracing::debug!(
            collection_count = snapshot.collections.len(),
            variable_count = snapshot.variables.len(),
            "document snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Parses a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid snapshot document.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl VariableSource for JsonSnapshot {
    fn local_variables(&self) -> Result<Vec<Variable>> {
        Ok(self.variables.clone())
    }

    fn collection_by_id(&self, id: &str) -> Result<Option<Collection>> {
        Ok(self.collections.iter().find(|c| c.id == id).cloned())
    }
}
