//! CSS custom-property emitter.
//!
//! ```css
//! :root {
//!   --colors-primary: #FF0000FF;
//!   --colors-accent: var(--colors-primary);
//!   --spacing-small: 8px;
//! }
//! ```

use super::{color, format_number, TokenRecord, TokenValue};

/// CSS value of a token: `var(--target)`, `#RRGGBBAA`, or `<n>px`.
#[must_use]
pub fn render_value(value: &TokenValue) -> String {
    match value {
        TokenValue::Reference(target) => format!("var({})", target.css_key),
        TokenValue::Color(rgba) => color::to_css_hex(rgba),
        TokenValue::Number(number) => format!("{}px", format_number(*number)),
    }
}

/// One declaration line, indented as it appears inside the `:root` block.
#[must_use]
pub fn declaration(record: &TokenRecord) -> String {
    format!("  {}: {};", record.css_key, render_value(&record.value))
}

/// Renders the full `:root { ... }` document.
#[must_use]
pub fn emit(records: &[TokenRecord]) -> String {
    let mut out = String::from(":root {\n");
    for record in records {
        out.push_str(&declaration(record));
        out.push('\n');
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{TokenKind, TokenRef};
    use crate::domain::Rgba;

    fn record(name: &str, kind: TokenKind, value: TokenValue) -> TokenRecord {
        TokenRecord {
            name: name.to_string(),
            css_key: crate::codegen::naming::css_key(name),
            js_name: crate::codegen::naming::js_name(name),
            pascal_name: crate::codegen::naming::pascal_name(name),
            kind,
            value,
        }
    }

    #[test]
    fn test_emit() {
        let records = vec![
            record("Colors/Primary", TokenKind::Color, TokenValue::Color(Rgba::new(1.0, 0.0, 0.0, 1.0))),
            record(
                "Colors/Link",
                TokenKind::Color,
                TokenValue::Reference(TokenRef {
                    css_key: "--colors-primary".into(),
                    js_name: "colorsPrimary".into(),
                    pascal_name: "ColorsPrimary".into(),
                }),
            ),
            record("Spacing/Half", TokenKind::Dimension, TokenValue::Number(0.5)),
        ];

        assert_eq!(
            emit(&records),
            ":root {\n  --colors-primary: #FF0000FF;\n  --colors-link: var(--colors-primary);\n  --spacing-half: 0.5px;\n}"
        );
    }

    #[test]
    fn test_emit_empty() {
        assert_eq!(emit(&[]), ":root {\n}");
    }
}
