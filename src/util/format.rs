//! Number formatting utilities.

/// Format an integer with comma thousands separators (e.g. `1,200,000`).
#[must_use]
pub fn format_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let bytes = digits.as_bytes();
    let mut result = String::with_capacity(bytes.len() + bytes.len() / 3 + 1);

    if value < 0 {
        result.push('-');
    }
    for (i, &c) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c as char);
    }
    result
}

/// Format a character count with units (e.g. `5.2M`, `53.0K`).
#[must_use]
pub fn format_compact(value: u128) -> String {
    fn scaled(value: u128, divisor: u128, suffix: &str) -> String {
        let major = value / divisor;
        let minor = (value % divisor) / (divisor / 10);
        format!("{major}.{minor}{suffix}")
    }

    if value >= 1_000_000 {
        scaled(value, 1_000_000, "M")
    } else if value >= 1_000 {
        scaled(value, 1_000, "K")
    } else {
        value.to_string()
    }
}

/// Format a percentage with one decimal (e.g. `8.3%`).
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(1_200_000), "1,200,000");
        assert_eq!(format_thousands(5_000_000), "5,000,000");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(0), "0");
    }

    #[test]
    fn thousands_negative() {
        assert_eq!(format_thousands(-1_000_000), "-1,000,000");
        assert_eq!(format_thousands(-12), "-12");
    }

    #[test]
    fn compact_units() {
        assert_eq!(format_compact(5_200_000), "5.2M");
        assert_eq!(format_compact(53_000), "53.0K");
        assert_eq!(format_compact(500), "500");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(format_percent(70.0), "70.0%");
        assert_eq!(format_percent(100.0 / 12.0), "8.3%");
    }
}
