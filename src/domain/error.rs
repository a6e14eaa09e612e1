//! Error types for the variable export plugin.
//!
//! This module defines the centralized error type [`ExportError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Errors are raised
//! synchronously and never caught internally: a failed generation pass produces no
//! output at all, so the UI never sees a partial document.

use crate::domain::ResolvedType;
use thiserror::Error;

/// The main error type for variable export operations.
///
/// The first four variants are the generation pipeline's own failure modes. The
/// remaining variants cover selection invariants, host data access, and
/// configuration loading.
///
/// # Examples
///
/// ```
/// use varexport::ExportError;
///
/// fn select(value: Option<&str>) -> Result<&str, ExportError> {
///     value.ok_or(ExportError::NoCollectionSelected)
/// }
///
/// assert!(select(None).is_err());
/// ```
#[derive(Debug, Error)]
pub enum ExportError {
    /// The resolver was invoked before any mode was chosen.
    #[error("No mode selected")]
    NoModeSelected,

    /// A collection-selection event arrived with a null or empty value.
    #[error("No collection selected")]
    NoCollectionSelected,

    /// A line handed to the CSS-to-JS back-parser is not a `--name: value;` declaration.
    #[error("Invalid CSS property string: {0:?}")]
    InvalidCssPropertyFormat(String),

    /// An alias points to a variable id absent from the loaded set.
    #[error("Variable {variable:?} aliases unknown variable id {target:?}")]
    DanglingAliasReference {
        /// Name of the aliasing variable.
        variable: String,
        /// Id the alias points to.
        target: String,
    },

    /// A collection id that the document does not define was selected.
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    /// A mode id that does not belong to the selected collection was selected.
    #[error("Mode {mode:?} does not belong to collection {collection:?}")]
    UnknownMode {
        /// Requested mode id.
        mode: String,
        /// Currently selected collection id, if any.
        collection: Option<String>,
    },

    /// A variable was resolved under a mode it does not define.
    #[error("Variable {variable:?} has no value for mode {mode:?}")]
    MissingModeValue {
        /// Name of the variable.
        variable: String,
        /// Selected mode id.
        mode: String,
    },

    /// Inlining an alias found no value for the selected mode on the target.
    #[error("Alias {variable:?} -> {target:?} has no value for mode {mode:?}")]
    UnresolvedAlias {
        /// Name of the aliasing variable.
        variable: String,
        /// Name of the alias target.
        target: String,
        /// Selected mode id.
        mode: String,
    },

    /// Inlining an alias landed on another alias. Resolution stops after one hop.
    #[error("Alias {variable:?} -> {target:?} points to another alias")]
    NestedAlias {
        /// Name of the aliasing variable.
        variable: String,
        /// Name of the alias target.
        target: String,
    },

    /// A variable's stored value does not match its declared type.
    #[error("Variable {variable:?} holds a value that is not a {expected:?}")]
    ValueTypeMismatch {
        /// Name of the offending variable.
        variable: String,
        /// Declared resolved type.
        expected: ResolvedType,
    },

    /// A selection event arrived before the session was initialized.
    #[error("Session not initialized")]
    NotInitialized,

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A document snapshot or UI message could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A text pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// A configuration file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for variable export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
