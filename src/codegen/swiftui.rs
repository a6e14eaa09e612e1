//! SwiftUI emitter.
//!
//! Produces a `struct Constants { ... }` with one `static let` per token, typed
//! `Color` or `CGFloat`.

use super::{color, format_number, TokenKind, TokenRecord, TokenValue};

fn render_value(value: &TokenValue) -> String {
    match value {
        TokenValue::Reference(target) => format!("Constants.{}", target.pascal_name),
        TokenValue::Color(rgba) => color::to_swiftui_color(rgba),
        TokenValue::Number(number) => format_number(*number),
    }
}

const fn type_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Color => "Color",
        TokenKind::Dimension => "CGFloat",
    }
}

/// Renders the full `struct Constants { ... }` document.
#[must_use]
pub fn emit(records: &[TokenRecord]) -> String {
    let mut out = String::from("struct Constants {\n");
    for record in records {
        out.push_str(&format!(
            "  static let {}: {} = {}\n",
            record.pascal_name,
            type_name(record.kind),
            render_value(&record.value)
        ));
    }
    out.push('}');
    out
}
