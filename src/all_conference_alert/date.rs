use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    // e.g. "20 December 2025", "13th Jan 2026"
    static ref DATE_REGEX: Regex = Regex::new(
        r"(?P<day>\d{1,2})(?i:st|nd|rd|th)?\s+(?P<month>[A-Za-z]{3,})\s+(?P<year>\d{4})\b"
    )
    .expect("Failed to create date regex");
    static ref MONTHS: HashMap<&'static str, u32> = HashMap::from([
        ("JAN", 1),
        ("JANUARY", 1),
        ("FEB", 2),
        ("FEBRUARY", 2),
        ("MAR", 3),
        ("MARCH", 3),
        ("APR", 4),
        ("APRIL", 4),
        ("MAY", 5),
        ("JUN", 6),
        ("JUNE", 6),
        ("JUL", 7),
        ("JULY", 7),
        ("AUG", 8),
        ("AUGUST", 8),
        ("SEP", 9),
        ("SEPT", 9),
        ("SEPTEMBER", 9),
        ("OCT", 10),
        ("OCTOBER", 10),
        ("NOV", 11),
        ("NOVEMBER", 11),
        ("DEC", 12),
        ("DECEMBER", 12),
    ]);
}

/// Whether the text holds something shaped like `<day> <month> <year>`,
/// regardless of it being a real date.
pub fn contains_date(text: &str) -> bool {
    DATE_REGEX.is_match(text)
}

/**
Parses the first `<day>[st|nd|rd|th] <month> <year>` found in the text.

Returns `None` when there is no such substring, the month is unknown or the
day doesn't exist in that month.
*/
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let captures = DATE_REGEX.captures(text)?;

    let day: u32 = captures["day"].parse().ok()?;
    let month = month_number(&captures["month"])?;
    let year: i32 = captures["year"].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(token: &str) -> Option<u32> {
    let token = token.to_uppercase();

    MONTHS
        .get(token.as_str())
        .or_else(|| {
            let prefix: String = token.chars().take(3).collect();
            MONTHS.get(prefix.as_str())
        })
        .copied()
}
