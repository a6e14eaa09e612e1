//! Per-target identifier spellings derived from slash-delimited variable names.
//!
//! ```text
//! Colors/Primary/hoverState
//!   css      --colors-primary-hover-state
//!   js       colorsPrimaryHoverState
//!   pascal   ColorsPrimaryHoverState
//! ```

/// CSS custom property name: slashes become dashes, camelCase humps are split,
/// everything is lowercased, and `--` is prepended.
#[must_use]
pub fn css_key(name: &str) -> String {
    let mut kebab = String::with_capacity(name.len() + 8);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        let c = if c == '/' { '-' } else { c };
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            kebab.push('-');
        }
        kebab.push(c);
        prev = Some(c);
    }

    format!("--{}", kebab.to_lowercase())
}

/// Camel-cases a dash-separated property name (without the leading `--`).
///
/// A dash followed by a word character is dropped and that character uppercased.
/// Any other dash is kept.
#[must_use]
pub fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut chars = property.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '-' && (next.is_ascii_alphanumeric() || next == '_') => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }

    out
}

/// JavaScript constant name, the camelCase form of the CSS key.
#[must_use]
pub fn js_name(name: &str) -> String {
    let key = css_key(name);
    camel_case(key.strip_prefix("--").unwrap_or(&key))
}

/// Compose and SwiftUI identifier: trimmed segments with an uppercased first
/// letter, concatenated without a separator.
#[must_use]
pub fn pascal_name(name: &str) -> String {
    name.split('/')
        .map(str::trim)
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}
