//! Formatting utilities for terminal output

use std::time::Duration;

use crate::core::Word;

/// Format a ladder as an arrow chain, e.g. `CAT -> COT -> DOT -> DOG`
#[must_use]
pub fn format_ladder(words: &[Word]) -> String {
    words
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Format a duration with millisecond precision
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 1.0 {
        format!("{:.1}ms", secs * 1000.0)
    } else {
        format!("{secs:.2}s")
    }
}

/// Format a signed point total with an explicit sign, e.g. `+500` / `-60`
#[must_use]
pub fn format_signed(points: i64) -> String {
    if points >= 0 {
        format!("+{points}")
    } else {
        format!("{points}")
    }
}
