//! Variable-to-code generation pipeline.
//!
//! A generation pass turns the current selection into four complete documents.
//! The pipeline runs in two stages:
//!
//! ```text
//! variables ─► select (collection, mode, COLOR|FLOAT, sort by name)
//!           ─► resolve once into TokenRecord
//!           ─► css / js / compose / swiftui emitters
//! ```
//!
//! Every emitter consumes the same `&[TokenRecord]` slice, so ordering is
//! identical across formats and no emitter depends on another's text output.
//!
//! # Modules
//!
//! - [`collation`]: Name ordering
//! - [`color`]: RGBA to hex codec and per-target color literals
//! - [`naming`]: Per-target identifier spellings
//! - [`resolve`]: Mode-aware, one-hop alias resolution
//! - [`css`], [`js`], [`compose`], [`swiftui`]: Emitters

pub mod collation;
pub mod color;
pub mod compose;
pub mod css;
pub mod js;
pub mod naming;
pub mod resolve;
pub mod swiftui;

use crate::domain::error::{ExportError, Result};
use crate::domain::{ResolvedType, Rgba, Variable, VariableValue};
use collation::compare_names;
use resolve::{Resolution, Resolver};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format of a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Css,
    Js,
    Compose,
    Swiftui,
}

impl Target {
    /// Every target, in the order documents are published.
    pub const ALL: [Self; 4] = [Self::Css, Self::Js, Self::Compose, Self::Swiftui];

    /// Human-readable format name used in notifications.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS",
            Self::Js => "JavaScript",
            Self::Compose => "Compose",
            Self::Swiftui => "SwiftUI",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Knobs for a generation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Render aliases as the target's literal value instead of a reference.
    pub inline_aliases: bool,
}

/// Category of a token, deciding the declared type in typed targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Color,
    Dimension,
}

/// Names of an alias target in every target spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRef {
    pub css_key: String,
    pub js_name: String,
    pub pascal_name: String,
}

/// Renderable value of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Color(Rgba),
    Number(f64),
    Reference(TokenRef),
}

/// One variable resolved for the current selection, with all its names.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    /// Slash-delimited variable name as stored in the document.
    pub name: String,
    pub css_key: String,
    pub js_name: String,
    pub pascal_name: String,
    pub kind: TokenKind,
    pub value: TokenValue,
}

/// The four documents produced by one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub css: String,
    pub js: String,
    pub compose: String,
    pub swiftui: String,
}

impl GeneratedFiles {
    /// Document for one target.
    #[must_use]
    pub fn get(&self, target: Target) -> &str {
        match target {
            Target::Css => &self.css,
            Target::Js => &self.js,
            Target::Compose => &self.compose,
            Target::Swiftui => &self.swiftui,
        }
    }
}

/// Formats a number the way the host's number-to-string does.
///
/// Uses the shortest round-trip digits. Plain notation is used for magnitudes
/// in `[1e-6, 1e21)`, exponent notation (`1e+21`, `1.5e-7`) outside it, and
/// `-0` prints as `0`.
///
/// # Example
///
/// ```rust
/// use varexport::codegen::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1e-7), "1e-7");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. `1.225e1`.
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    // Position of the decimal point relative to the start of `digits`.
    let point = exponent + 1;
    let len = i32::try_from(digits.len()).unwrap_or(i32::MAX);

    let body = if (len..=21).contains(&point) {
        let zeros = usize::try_from(point - len).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else if (1..=21).contains(&point) {
        let split = usize::try_from(point).unwrap_or(0);
        format!("{}.{}", &digits[..split], &digits[split..])
    } else if (-5..=0).contains(&point) {
        let zeros = usize::try_from(-point).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let exponent_sign = if exponent < 0 { "-" } else { "+" };
        let (head, tail) = digits.split_at(1);
        let fraction = if tail.is_empty() { String::new() } else { format!(".{tail}") };
        format!("{head}{fraction}e{exponent_sign}{}", exponent.abs())
    };

    format!("{sign}{body}")
}

/// Variables taking part in a pass: members of `collection` that define `mode`
/// and resolve to COLOR or FLOAT, sorted by name.
///
/// Without a selected collection or mode nothing is selected.
#[must_use]
pub fn select_variables<'a>(
    variables: &'a [Variable],
    collection: Option<&str>,
    mode: Option<&str>,
) -> Vec<&'a Variable> {
    let (Some(collection), Some(mode)) = (collection, mode) else {
        return Vec::new();
    };

    let mut selected: Vec<&Variable> = variables
        .iter()
        .filter(|v| v.variable_collection_id == collection)
        .filter(|v| v.value_for(mode).is_some())
        .filter(|v| v.resolved_type.is_exportable())
        .collect();
    selected.sort_by(|a, b| compare_names(&a.name, &b.name));
    selected
}

fn literal_value(variable: &Variable, kind: TokenKind, value: &VariableValue) -> Result<TokenValue> {
    match (kind, value) {
        (TokenKind::Color, VariableValue::Color(color)) => Ok(TokenValue::Color(*color)),
        (TokenKind::Dimension, VariableValue::Number(number)) => Ok(TokenValue::Number(*number)),
        _ => Err(ExportError::ValueTypeMismatch {
            variable: variable.name.clone(),
            expected: variable.resolved_type,
        }),
    }
}

fn token_record(
    resolver: &Resolver<'_>,
    variable: &Variable,
    options: GenerateOptions,
) -> Result<TokenRecord> {
    let kind = match variable.resolved_type {
        ResolvedType::Color => TokenKind::Color,
        _ => TokenKind::Dimension,
    };

    let value = if options.inline_aliases {
        literal_value(variable, kind, resolver.resolve_literal(variable)?)?
    } else {
        match resolver.resolve(variable)? {
            Resolution::Literal(value) => literal_value(variable, kind, value)?,
            Resolution::Alias { target, .. } => TokenValue::Reference(TokenRef {
                css_key: naming::css_key(&target.name),
                js_name: naming::js_name(&target.name),
                pascal_name: naming::pascal_name(&target.name),
            }),
        }
    };

    Ok(TokenRecord {
        name: variable.name.clone(),
        css_key: naming::css_key(&variable.name),
        js_name: naming::js_name(&variable.name),
        pascal_name: naming::pascal_name(&variable.name),
        kind,
        value,
    })
}

/// Selects, sorts and resolves the variables of one pass into token records.
///
/// # Errors
///
/// Propagates resolution failures; no records are returned if any variable fails.
pub fn build_records(
    variables: &[Variable],
    collection: Option<&str>,
    mode: Option<&str>,
    options: GenerateOptions,
) -> Result<Vec<TokenRecord>> {
    let resolver = Resolver::new(variables, mode);
    select_variables(variables, collection, mode)
        .into_iter()
        .map(|variable| token_record(&resolver, variable, options))
        .collect()
}

/// Runs a full generation pass and renders all four documents.
///
/// # Errors
///
/// Propagates resolution failures. Generation is all-or-nothing.
///
/// # Example
///
/// ```rust
/// use varexport::codegen::{generate, GenerateOptions};
/// use varexport::domain::{ResolvedType, Variable, VariableValue};
///
/// let variables = vec![
///     Variable::new("v1", "Spacing/Small", ResolvedType::Float, "c1")
///         .with_value("m1", VariableValue::Number(8.0)),
/// ];
/// let files = generate(&variables, Some("c1"), Some("m1"), GenerateOptions::default())?;
/// assert_eq!(files.css, ":root {\n  --spacing-small: 8px;\n}");
/// assert_eq!(files.js, "export const spacingSmall = '8px';\n");
/// # Ok::<(), varexport::ExportError>(())
/// ```
pub fn generate(
    variables: &[Variable],
    collection: Option<&str>,
    mode: Option<&str>,
    options: GenerateOptions,
) -> Result<GeneratedFiles> {
    let _span = tracing::debug_span!("generate", collection = ?collection, mode = ?mode).entered();

    let records = build_records(variables, collection, mode, options)?;
    tracing::debug!(token_count = records.len(), "tokens resolved");

    Ok(GeneratedFiles {
        css: css::emit(&records),
        js: js::emit(&records),
        compose: compose::emit(&records),
        swiftui: swiftui::emit(&records),
    })
}
