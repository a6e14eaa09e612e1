//! JavaScript constants emitter and CSS declaration back-parser.
//!
//! The emitter renders straight from token records. Literal values are the CSS
//! rendering wrapped in single quotes; aliases become a bare reference to the
//! target constant.
//!
//! ```js
//! export const colorsPrimary = '#FF0000FF';
//! export const colorsLink = colorsPrimary;
//! ```
//!
//! [`css_declaration_to_js`] converts a single generated CSS declaration into the
//! equivalent statement, for callers that only hold CSS text.

use super::naming::camel_case;
use super::{css, TokenRecord, TokenValue};
use crate::domain::error::{ExportError, Result};
use regex::Regex;

const DECLARATION_PATTERN: &str = r"--(.+):\s*(.+);";
const REFERENCE_PATTERN: &str = r"--([A-Za-z0-9_]+(?:-[A-Za-z0-9_]+)*)";

fn render_value(value: &TokenValue) -> String {
    match value {
        TokenValue::Reference(target) => target.js_name.clone(),
        literal => format!("'{}'", css::render_value(literal)),
    }
}

/// One `export const` statement.
#[must_use]
pub fn statement(record: &TokenRecord) -> String {
    format!("export const {} = {};", record.js_name, render_value(&record.value))
}

/// Renders the JS module: one statement per line, each newline-terminated.
#[must_use]
pub fn emit(records: &[TokenRecord]) -> String {
    records
        .iter()
        .map(|record| statement(record) + "\n")
        .collect()
}

/// Camel-cases the property referenced by a `var(--...)` expression.
///
/// Returns an empty string when the expression holds no property reference.
///
/// # Errors
///
/// Returns an error if the reference pattern fails to compile.
pub fn css_reference_to_camel(expression: &str) -> Result<String> {
    let pattern = Regex::new(REFERENCE_PATTERN)?;
    Ok(pattern
        .captures(expression)
        .and_then(|caps| caps.get(1))
        .map(|property| camel_case(property.as_str()))
        .unwrap_or_default())
}

/// Converts one `--name: value;` declaration to an `export const` statement.
///
/// # Errors
///
/// Returns [`ExportError::InvalidCssPropertyFormat`] if the trimmed line is not a
/// custom-property declaration.
///
/// # Example
///
/// ```rust
/// use varexport::codegen::js::css_declaration_to_js;
///
/// let statement = css_declaration_to_js("  --colors-link: var(--colors-primary);")?;
/// assert_eq!(statement, "export const colorsLink = colorsPrimary;");
/// # Ok::<(), varexport::ExportError>(())
/// ```
pub fn css_declaration_to_js(line: &str) -> Result<String> {
    let line = line.trim();
    let pattern = Regex::new(DECLARATION_PATTERN)?;

    let caps = pattern
        .captures(line)
        .ok_or_else(|| ExportError::InvalidCssPropertyFormat(line.to_string()))?;
    let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
        return Err(ExportError::InvalidCssPropertyFormat(line.to_string()));
    };

    let value = value.as_str();
    let value = if value.starts_with("var(--") {
        css_reference_to_camel(value)?
    } else {
        format!("'{value}'")
    };

    Ok(format!("export const {} = {};", camel_case(name.as_str()), value))
}

/// Converts every declaration of a `:root { ... }` document.
///
/// Block delimiters and blank lines are skipped.
///
/// # Errors
///
/// Fails on the first line that is not a custom-property declaration.
pub fn css_document_to_js(document: &str) -> Result<String> {
    let mut out = String::new();
    for line in document.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == ":root {" || trimmed == "}" {
            continue;
        }
        out.push_str(&css_declaration_to_js(trimmed)?);
        out.push('\n');
    }
    Ok(out)
}
