//! Display formatting for durations and publication dates
//!
//! All date labels follow Brazilian Portuguese conventions, matching the
//! locale the listing pages are rendered in. Month and weekday names are
//! fixed tables so the output does not depend on the system locale.

use chrono::{Datelike, NaiveDate};

/// Abbreviated month names (pt-BR)
const MONTHS_SHORT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Full month names (pt-BR)
const MONTHS_LONG: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Abbreviated weekday names (pt-BR), Sunday first
const WEEKDAYS_SHORT: [&str; 7] = ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"];

/// Formats a duration in seconds as `HH:MM:SS`
///
/// Each unit is zero-padded to two digits. Durations of 100 hours or more
/// keep their full hour count.
///
/// # Examples
///
/// ```
/// use podfeed::format::duration_as_string;
///
/// assert_eq!(duration_as_string(3981), "01:06:21");
/// assert_eq!(duration_as_string(0), "00:00:00");
/// ```
pub fn duration_as_string(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Formats a date as a short pt-BR label, e.g. `8 jan 21`
///
/// The day is not zero-padded, the month is abbreviated and the year is
/// reduced to its last two digits.
pub fn short_date_label(date: NaiveDate) -> String {
    let month = MONTHS_SHORT[(date.month0()) as usize];
    format!("{} {} {:02}", date.day(), month, date.year().rem_euclid(100))
}

/// Formats a date as the page-header label, e.g. `qui, 8 abril`
pub fn header_date_label(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_SHORT[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS_LONG[(date.month0()) as usize];
    format!("{}, {} {}", weekday, date.day(), month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_under_one_hour() {
        assert_eq!(duration_as_string(65), "00:01:05");
        assert_eq!(duration_as_string(59), "00:00:59");
    }

    #[test]
    fn test_duration_with_hours() {
        assert_eq!(duration_as_string(3981), "01:06:21");
        assert_eq!(duration_as_string(3700), "01:01:40");
        assert_eq!(duration_as_string(3600), "01:00:00");
    }

    #[test]
    fn test_duration_zero() {
        assert_eq!(duration_as_string(0), "00:00:00");
    }

    #[test]
    fn test_duration_long() {
        // 100 hours exactly
        assert_eq!(duration_as_string(360_000), "100:00:00");
    }

    #[test]
    fn test_short_date_label() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 8).unwrap();
        assert_eq!(short_date_label(date), "8 jan 21");

        let date = NaiveDate::from_ymd_opt(2020, 12, 25).unwrap();
        assert_eq!(short_date_label(date), "25 dez 20");
    }

    #[test]
    fn test_short_date_label_pads_year() {
        let date = NaiveDate::from_ymd_opt(2009, 6, 1).unwrap();
        assert_eq!(short_date_label(date), "1 jun 09");
    }

    #[test]
    fn test_header_date_label() {
        // 2021-04-08 was a Thursday
        let date = NaiveDate::from_ymd_opt(2021, 4, 8).unwrap();
        assert_eq!(header_date_label(date), "qui, 8 abril");

        // 2021-01-10 was a Sunday
        let date = NaiveDate::from_ymd_opt(2021, 1, 10).unwrap();
        assert_eq!(header_date_label(date), "dom, 10 janeiro");
    }
}
