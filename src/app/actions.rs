//! Actions representing side effects to be executed by the host shim.
//!
//! The event handler never talks to the host itself. It returns a `Vec<Action>`
//! and the shim executes them in order.

use crate::app::messages::UiUpdate;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Publishes freshly generated documents and picker contents to the UI.
    PostUiUpdate(UiUpdate),

    /// Shows a transient, informational notification to the user.
    Notify(String),
}
