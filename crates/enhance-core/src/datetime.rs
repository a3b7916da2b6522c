//! Long-form locale date rendering for the exported page utilities.

use crate::error::EnhanceError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Genitive month names, as the long date form requires.
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Format an ISO-like date string as a Russian long-form date with time,
/// e.g. `15 января 2024 г., 10:30`.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM[:SS]`,
/// `YYYY-MM-DD HH:MM[:SS]`, and bare `YYYY-MM-DD` (midnight).
///
/// ```
/// use enhance_core::datetime::format_long_ru;
///
/// let rendered = format_long_ru("2024-01-15T10:30:00").unwrap();
/// assert_eq!(rendered, "15 января 2024 г., 10:30");
/// ```
pub fn format_long_ru(input: &str) -> Result<String, EnhanceError> {
    let datetime = parse_iso_like(input.trim())
        .ok_or_else(|| EnhanceError::DateParse(input.to_string()))?;

    let month = MONTHS_GENITIVE[datetime.date().month0() as usize];
    Ok(format!(
        "{} {} {} г., {:02}:{:02}",
        datetime.date().day(),
        month,
        datetime.date().year(),
        datetime.hour(),
        datetime.minute()
    ))
}

fn parse_iso_like(input: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(input) {
        return Some(with_offset.naive_local());
    }

    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_long_ru("2024-01-15T10:30:00").unwrap(),
            "15 января 2024 г., 10:30"
        );
    }

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(
            format_long_ru("2024-03-08T09:05:00+03:00").unwrap(),
            "8 марта 2024 г., 09:05"
        );
    }

    #[test]
    fn test_format_space_separated() {
        assert_eq!(
            format_long_ru("2023-12-31 23:59:59").unwrap(),
            "31 декабря 2023 г., 23:59"
        );
    }

    #[test]
    fn test_bare_date_renders_midnight() {
        assert_eq!(
            format_long_ru("2024-05-01").unwrap(),
            "1 мая 2024 г., 00:00"
        );
    }

    #[test]
    fn test_unparseable_input_errors() {
        assert!(format_long_ru("вчера").is_err());
        assert!(format_long_ru("").is_err());
        assert!(format_long_ru("2024-13-01").is_err());
    }

    #[test]
    fn test_every_month_has_a_name() {
        for month in 1..=12u32 {
            let date = NaiveDate::from_ymd_opt(2024, month, 1).unwrap();
            assert_eq!(date.month0() as usize, month as usize - 1);
            assert!(!MONTHS_GENITIVE[date.month0() as usize].is_empty());
        }
    }
}
