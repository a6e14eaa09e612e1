//! Application layer coordinating selection state, events, and actions.
//!
//! This module sits between the host shim (main.rs) and the code generation and
//! host data layers.
//!
//! ```text
//! UI message → Event → handle_event → new SelectionState → generate → Action
//!                          ↑                                           ↓
//!                          └──────── VariableSource lookups   PostUiUpdate / Notify
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`messages`]: Inbound UI messages and the outbound update
//! - [`state`]: Session lifecycle and the immutable selection snapshot

pub mod actions;
pub mod handler;
pub mod messages;
pub mod state;

pub use actions::Action;
pub use handler::{copied_notification, handle_event, Event};
pub use messages::{UiMessage, UiUpdate};
pub use state::{SelectionState, Session, SessionState};
