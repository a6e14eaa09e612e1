//! Wire messages exchanged with the plugin UI.
//!
//! Inbound messages carry a `type` discriminator. Outbound updates are one JSON
//! object per generation pass holding all four documents plus the current
//! collection and mode pickers.

use crate::codegen::GeneratedFiles;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Messages sent from the UI to the plugin core.
///
/// # Example
///
/// ```rust
/// use varexport::app::UiMessage;
///
/// let message: UiMessage = serde_json::from_str(r#"{"type":"mode-selected","value":"1:1"}"#)?;
/// assert_eq!(message, UiMessage::ModeSelected { value: "1:1".to_string() });
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    /// The CSS document was copied to the clipboard.
    CodeCopiedCss,
    /// The JavaScript document was copied to the clipboard.
    CodeCopiedJs,
    /// The Compose document was copied to the clipboard.
    CodeCopiedCompose,
    /// The SwiftUI document was copied to the clipboard.
    CodeCopiedSwiftui,

    /// The user picked a collection. `value` may be null.
    CollectionSelected {
        #[serde(default)]
        value: Option<String>,
    },

    /// The user picked a mode of the current collection.
    ModeSelected { value: String },
}

/// Update published to the UI after every generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiUpdate {
    pub css_file: String,
    pub js_file: String,
    pub compose_file: String,
    pub swiftui_file: String,
    /// Collection id to display name, in picker order.
    pub collections: IndexMap<String, String>,
    /// Mode id to display name for the selected collection, in picker order.
    pub modes: IndexMap<String, String>,
}

impl UiUpdate {
    /// Bundles generated documents with the picker contents.
    #[must_use]
    pub fn new(
        files: GeneratedFiles,
        collections: IndexMap<String, String>,
        modes: IndexMap<String, String>,
    ) -> Self {
        Self {
            css_file: files.css,
            js_file: files.js,
            compose_file: files.compose,
            swiftui_file: files.swiftui,
            collections,
            modes,
        }
    }
}
