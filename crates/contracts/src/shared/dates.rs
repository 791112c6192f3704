//! Разбор дат из извлечённых документов
//!
//! Дата может прийти как "2024-03-15", "2024-03-15T14:02:26.123Z" или не
//! прийти вовсе. Невалидная строка даёт `None`, поэтому любое сравнение с
//! такой датой вычисляется как false — агрегация никогда не падает на
//! одной плохой записи.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Разобрать строку в календарную дату (время отбрасывается).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    parse_datetime(raw).map(|dt| dt.date())
}

/// Разобрать строку в дату-время (ISO 8601 / RFC 3339, с долями секунд или без).
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_date("2024-03-15"), Some(expected));
        assert_eq!(parse_date("2024-03-15T14:02:26"), Some(expected));
        assert_eq!(parse_date("2024-03-15T14:02:26.123Z"), Some(expected));
        assert_eq!(parse_date(" 2024-03-15 "), Some(expected));
    }

    #[test]
    fn test_invalid_input_is_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-45"), None);
        assert_eq!(parse_datetime("15.03.2024"), None);
    }

    #[test]
    fn test_comparison_against_invalid_date_is_false() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        // Типовой паттерн использования в агрегаторе
        assert!(!parse_date("garbage").map(|d| d >= today).unwrap_or(false));
    }
}
