//! Date helper functions

use chrono::NaiveDate;

/// Format a post date for display in lists: day without leading zero,
/// abbreviated month, full year (`5 Mar, 2024`).
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-d %b, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date_drops_leading_zero() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(short_date(date), "5 Mar, 2024");
    }

    #[test]
    fn test_short_date_two_digit_day() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(short_date(date), "25 Dec, 2024");
    }
}
