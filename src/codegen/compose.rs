//! Jetpack Compose emitter.
//!
//! Produces an `object Variables { ... }` with one `val` per token, typed
//! `Color` or `Dp`.

use super::{color, format_number, TokenKind, TokenRecord, TokenValue};

fn render_value(value: &TokenValue) -> String {
    match value {
        TokenValue::Reference(target) => format!("Variables.{}", target.pascal_name),
        TokenValue::Color(rgba) => color::to_compose_color(rgba),
        TokenValue::Number(number) => format!("{}.dp", format_number(*number)),
    }
}

const fn type_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Color => "Color",
        TokenKind::Dimension => "Dp",
    }
}

/// Renders the full `object Variables { ... }` document.
#[must_use]
pub fn emit(records: &[TokenRecord]) -> String {
    let mut out = String::from("object Variables {\n");
    for record in records {
        out.push_str(&format!(
            "  val {}: {} = {}\n",
            record.pascal_name,
            type_name(record.kind),
            render_value(&record.value)
        ));
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{build_records, GenerateOptions};
    use crate::domain::{ResolvedType, Rgba, Variable, VariableValue};

    #[test]
    fn test_emit() {
        let variables = vec![
            Variable::new("a", "Colors/Primary", ResolvedType::Color, "c1")
                .with_value("m1", VariableValue::Color(Rgba::new(1.0, 0.0, 0.0, 0.5))),
            Variable::new("b", "Colors/Link", ResolvedType::Color, "c1")
                .with_value("m1", VariableValue::alias("a")),
            Variable::new("c", "Spacing/Small", ResolvedType::Float, "c1")
                .with_value("m1", VariableValue::Number(8.0)),
        ];
        let records = build_records(&variables, Some("c1"), Some("m1"), GenerateOptions::default()).unwrap();

        assert_eq!(
            emit(&records),
            "object Variables {\n\
             \x20 val ColorsLink: Color = Variables.ColorsPrimary\n\
             \x20 val ColorsPrimary: Color = Color(0x80FF0000)\n\
             \x20 val SpacingSmall: Dp = 8.dp\n\
             }"
        );
    }
}
