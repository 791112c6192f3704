/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the dashboard

/// Format ISO datetime string to YYYY-MM-DD (date part only)
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn format_date(date_str: &str) -> String {
    date_str.split('T').next().unwrap_or(date_str).to_string()
}

/// Format an optional raw date field for a table cell; "-" when absent
pub fn format_date_cell(date_str: Option<&str>) -> String {
    match date_str {
        Some(raw) if !raw.trim().is_empty() => format_date(raw),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
    }

    #[test]
    fn test_format_date_cell() {
        assert_eq!(format_date_cell(Some("2024-03-15T10:00:00")), "2024-03-15");
        assert_eq!(format_date_cell(Some("  ")), "-");
        assert_eq!(format_date_cell(None), "-");
    }
}
