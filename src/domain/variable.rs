//! Design variable domain model.
//!
//! These types mirror the host document's variable API: a [`Variable`] belongs to
//! one collection and stores one [`VariableValue`] per mode id. The host owns the
//! data; this crate only ever reads it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The type a variable resolves to once aliases are followed.
///
/// Only [`ResolvedType::Color`] and [`ResolvedType::Float`] take part in code
/// generation. Anything else is filtered out before emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolvedType {
    Color,
    Float,
    Boolean,
    String,
    #[serde(other)]
    Other,
}

impl ResolvedType {
    /// Returns `true` for the types the emitters know how to render.
    #[must_use]
    pub const fn is_exportable(self) -> bool {
        matches!(self, Self::Color | Self::Float)
    }
}

/// Normalized RGBA color with channels in `[0, 1]`.
///
/// The alpha channel is optional on the wire. An absent alpha means a fully
/// opaque color, never a transparent one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Rgba {
    /// Creates a color with an explicit alpha channel.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Alpha channel, defaulting to `1.0` when the host omitted it.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.a.unwrap_or(1.0)
    }
}

/// Marker for the host's alias tag (`"type": "VARIABLE_ALIAS"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliasKind {
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}

/// Reference from one variable's mode value to another variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRef {
    #[serde(rename = "type")]
    pub kind: AliasKind,
    /// Id of the target variable.
    pub id: String,
}

/// Value stored for one mode: either a literal or an alias to another variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Alias(AliasRef),
    Color(Rgba),
    Number(f64),
    Boolean(bool),
    Text(String),
}

impl VariableValue {
    /// Builds an alias value pointing at `id`.
    #[must_use]
    pub fn alias(id: impl Into<String>) -> Self {
        Self::Alias(AliasRef {
            kind: AliasKind::VariableAlias,
            id: id.into(),
        })
    }

    /// Returns the alias target id if this value is an alias.
    #[must_use]
    pub fn alias_target(&self) -> Option<&str> {
        match self {
            Self::Alias(alias) => Some(&alias.id),
            _ => None,
        }
    }
}

/// A named design token whose value may differ per mode.
///
/// `name` is a slash-delimited path such as `Colors/Primary/Base`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub resolved_type: ResolvedType,
    pub variable_collection_id: String,
    #[serde(default)]
    pub values_by_mode: HashMap<String, VariableValue>,
}

impl Variable {
    /// Creates a variable with no mode values.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        resolved_type: ResolvedType,
        collection_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            resolved_type,
            variable_collection_id: collection_id.into(),
            values_by_mode: HashMap::new(),
        }
    }

    /// Sets the value for `mode_id`, returning the variable for chaining.
    #[must_use]
    pub fn with_value(mut self, mode_id: impl Into<String>, value: VariableValue) -> Self {
        self.values_by_mode.insert(mode_id.into(), value);
        self
    }

    /// Value stored for `mode_id`, if the variable defines one.
    #[must_use]
    pub fn value_for(&self, mode_id: &str) -> Option<&VariableValue> {
        self.values_by_mode.get(mode_id)
    }
}

/// A variant axis within a collection, such as light or dark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

/// A named group of variables sharing one ordered set of modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub modes: Vec<Mode>,
}
