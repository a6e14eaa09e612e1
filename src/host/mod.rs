//! Host data layer.
//!
//! The plugin never touches the design document directly. It reads variables and
//! collections through [`VariableSource`], which the live runtime or a
//! [`JsonSnapshot`] implements.
//!
//! # Modules
//!
//! - [`source`]: The `VariableSource` trait and collection/mode listing helpers
//! - [`snapshot`]: JSON file-backed source

pub mod snapshot;
pub mod source;

pub use snapshot::JsonSnapshot;
pub use source::{list_collections, modes_of_collection, VariableSource};
