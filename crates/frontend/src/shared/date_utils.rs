//! Utilities for date handling
//!
//! The backend returns ISO datetimes ("2024-03-15T00:00:00"); native date
//! inputs want plain "yyyy-mm-dd". Display formatting is DD.MM.YYYY.

/// Strip the time part of an ISO datetime string.
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn date_only(date_str: &str) -> String {
    date_str.split('T').next().unwrap_or(date_str).to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Today's local date in yyyy-mm-dd, for seeding date inputs.
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only() {
        assert_eq!(date_only("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(date_only("2024-03-15"), "2024-03-15");
        assert_eq!(date_only(""), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }
}
