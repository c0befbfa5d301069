//! Locale-aware numeric parsing.
//!
//! Source spreadsheets use the Brazilian convention: `.` groups thousands,
//! `,` marks the decimal. The conversion is one-directional and is a
//! documented format assumption, not a general parser: a value that was
//! originally dot-decimal ("1.5") parses as fifteen. Alternate locales swap
//! the separators here without touching extraction logic.

/// A thousands/decimal separator pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub thousands: char,
    pub decimal: char,
}

impl NumberFormat {
    /// Thousands dot, decimal comma ("1.234,56").
    pub fn brazilian() -> Self {
        Self {
            thousands: '.',
            decimal: ',',
        }
    }

    /// Parses a cell's text content. Returns `None` for blank or
    /// unparseable input; never panics.
    pub fn parse(&self, raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let cleaned: String = trimmed
            .chars()
            .filter(|ch| *ch != self.thousands)
            .map(|ch| if ch == self.decimal { '.' } else { ch })
            .collect();
        cleaned.parse::<f64>().ok().filter(|value| !value.is_nan())
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::brazilian()
    }
}

/// Formats a number without trailing zeros ("10.50" -> "10.5", "10.0" -> "10").
pub fn format_number(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}
