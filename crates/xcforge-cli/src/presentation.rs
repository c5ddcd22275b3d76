//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

use std::fmt::Display;

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional value for display, returning a default if None.
pub fn format_optional<T: Display>(value: Option<T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), |v| v.to_string())
}

/// Join displayable items with `", "`, returning a default if there are none.
pub fn format_list<I>(items: I, default: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let joined = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        default.to_string()
    } else {
        joined
    }
}

/// Print a `label: value` row with the label padded to `width`.
pub fn print_row(label: &str, value: &str, width: usize) {
    println!("{label:<width$} {value}");
}
