//! Name ordering shared by every emitter.
//!
//! Follows the root collation order the host UI sorts with. Comparison runs in
//! two passes over the whole name:
//!
//! 1. Primary: whitespace < punctuation < symbols < digits < letters, letters
//!    compared case-insensitively. Punctuation keeps the collation's own order
//!    (`_` before `-` before `/`), not ASCII order.
//! 2. Tertiary: on a primary tie, the first case difference decides, lowercase
//!    first.
//!
//! ```text
//! Gap/a_b  <  Gap/a-b  <  Gap/a1  <  Gap/ab  <  Gap/Ab
//! ```
//!
//! Accented letters are not folded onto their base letter. They sort after
//! `z` by code point.

use std::cmp::Ordering;

/// ASCII punctuation in root collation order.
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

fn primary(c: char) -> (Group, u32) {
    if c.is_whitespace() {
        return (Group::Whitespace, u32::from(c));
    }
    if let Some(rank) = PUNCTUATION.find(c) {
        return (Group::Punctuation, u32::try_from(rank).unwrap_or(u32::MAX));
    }
    if let Some(digit) = c.to_digit(10) {
        return (Group::Digit, digit);
    }
    if c.is_alphabetic() {
        let folded = c.to_lowercase().next().unwrap_or(c);
        return (Group::Letter, u32::from(folded));
    }
    (Group::Symbol, u32::from(c))
}

fn tertiary(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

/// Compares two variable names in collation order.
///
/// Names that collate equal fall back to code point order so the result is
/// total.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary)
        .cmp(b.chars().map(primary))
        .then_with(|| a.chars().map(tertiary).cmp(b.chars().map(tertiary)))
        .then_with(|| a.cmp(b))
}
