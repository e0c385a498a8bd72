// Output formatting — terminal display of articles, trends and analyses.

pub mod terminal;

use chrono::{DateTime, NaiveDateTime};

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Render an aggregator timestamp for humans.
///
/// The pipeline emits both RFC 3339 ("2025-11-03T09:00:00Z") and naive
/// local stamps ("2025-11-03T10:30:00"); anything unparseable is shown
/// as-is rather than hidden.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d %b %Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%d %b %Y %H:%M").to_string();
    }
    raw.to_string()
}

/// Fixed-width meter for 0..=1 values, e.g. `[========            ]`.
pub fn meter(value: f64, width: usize) -> String {
    let clamped = value.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("ñoño ñoño", 4), "ñoño...");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
    }

    #[test]
    fn format_timestamp_handles_both_shapes() {
        assert_eq!(format_timestamp("2025-11-03T09:00:00Z"), "03 Nov 2025 09:00");
        assert_eq!(format_timestamp("2025-11-03T10:30:00"), "03 Nov 2025 10:30");
        assert_eq!(format_timestamp("ayer"), "ayer");
    }

    #[test]
    fn meter_fills_proportionally_and_clamps() {
        assert_eq!(meter(0.0, 4), "[    ]");
        assert_eq!(meter(0.5, 4), "[==  ]");
        assert_eq!(meter(1.0, 4), "[====]");
        assert_eq!(meter(7.3, 4), "[====]");
        assert_eq!(meter(-2.0, 4), "[    ]");
    }
}
