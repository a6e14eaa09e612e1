//! Color encoding for the generated snippets.
//!
//! All three color-bearing targets build on the same 8-digit `RRGGBBAA` hex form
//! produced by [`rgba_to_hex`].

use crate::domain::Rgba;

/// Converts one normalized channel to a byte.
///
/// Values outside `[0, 1]` are clamped so the result always fits two hex digits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Encodes normalized RGBA channels as 8 uppercase hex digits, `RRGGBBAA`.
///
/// An absent alpha is treated as `1.0` (opaque).
///
/// # Example
///
/// ```rust
/// use varexport::codegen::color::rgba_to_hex;
///
/// assert_eq!(rgba_to_hex(1.0, 0.0, 0.0, Some(1.0)), "FF0000FF");
/// assert_eq!(rgba_to_hex(0.0, 0.0, 0.0, None), "000000FF");
/// ```
#[must_use]
pub fn rgba_to_hex(r: f64, g: f64, b: f64, a: Option<f64>) -> String {
    let a = a.unwrap_or(1.0);
    [r, g, b, a]
        .into_iter()
        .map(|channel| format!("{:02X}", channel_to_byte(channel)))
        .collect()
}

/// CSS hex color, `#RRGGBBAA`.
#[must_use]
pub fn to_css_hex(color: &Rgba) -> String {
    format!("#{}", rgba_to_hex(color.r, color.g, color.b, color.a))
}

/// Compose color literal, `Color(0xAARRGGBB)`.
#[must_use]
pub fn to_compose_color(color: &Rgba) -> String {
    let hex = rgba_to_hex(color.r, color.g, color.b, color.a);
    let (rgb, alpha) = hex.split_at(6);
    format!("Color(0x{alpha}{rgb})")
}

/// Formats `value` with exactly two decimals, rounding a tie away from zero.
///
/// `{:.2}` rounds ties to even. A value sits exactly halfway between two
/// hundredths only when its fraction is an odd number of eighths, and eight
/// times a float is exact, so those ties are detected without error.
#[allow(clippy::float_cmp)]
fn format_fixed2(value: f64) -> String {
    if value == 0.0 {
        return "0.00".to_string();
    }

    let eighths = value.abs() * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    if !is_tie {
        return format!("{value:.2}");
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let hundredths = (value.abs() * 100.0).ceil();
    format!("{sign}{:.2}", hundredths / 100.0)
}

/// SwiftUI color expression with two-decimal channels.
///
/// `.opacity(..)` is appended only when alpha is not exactly `1`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn to_swiftui_color(color: &Rgba) -> String {
    let base = format!(
        "Color(red: {}, green: {}, blue: {})",
        format_fixed2(color.r),
        format_fixed2(color.g),
        format_fixed2(color.b)
    );
    let alpha = color.alpha();
    if alpha == 1.0 {
        base
    } else {
        format!("{base}.opacity({})", format_fixed2(alpha))
    }
}
