//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Uppercases the first letter, for category/material chips.
///
/// Usage in templates: `{{ "mates"|capitalize }}`
#[askama::filter_fn]
pub fn capitalize(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let s = value.to_string();
    let mut chars = s.chars();
    Ok(chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    }))
}
