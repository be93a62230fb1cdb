//! Numeric parse and format helpers shared by derivation and rendering.

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Formats a floating-point number in its natural string form, without
/// trailing fractional zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::{format_numeric, parse_f64};

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_f64("10"), Some(10.0));
        assert_eq!(parse_f64(" 2.5 "), Some(2.5));
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("ten"), None);
        assert_eq!(parse_f64("1,5"), None);
    }

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(format_numeric(20.0), "20");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(2.5), "2.5");
        assert_eq!(format_numeric(0.25), "0.25");
    }
}
