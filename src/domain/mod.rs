//! Domain layer for the variable export plugin.
//!
//! This module contains the core domain types, independent of the host runtime and
//! of any output format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`variable`]: Variables, collections, modes and their values
//!
//! # Examples
//!
//! ```
//! use varexport::domain::{ResolvedType, Rgba, Variable, VariableValue};
//!
//! let primary = Variable::new("v1", "Colors/Primary", ResolvedType::Color, "c1")
//!     .with_value("m1", VariableValue::Color(Rgba::new(1.0, 0.0, 0.0, 1.0)));
//! assert!(primary.value_for("m1").is_some());
//! ```

pub mod error;
pub mod variable;

pub use error::{ExportError, Result};
pub use variable::{AliasKind, AliasRef, Collection, Mode, ResolvedType, Rgba, Variable, VariableValue};
