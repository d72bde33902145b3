use chrono::{Datelike, Local};

/// Canonical month order used to sort reports, January first.
pub const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Position of `month` in [`MONTHS`].
///
/// Matching is exact (lowercase full names only). `None` orders before any
/// `Some`, so reports with an unrecognised month sort ahead of January.
pub fn month_index(month: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == month)
}

/// Two-digit suffix a year's data files carry, e.g. `"2020"` -> `"20"`.
///
/// Takes the last two characters; shorter input is returned whole.
pub fn short_year(year: &str) -> &str {
    let count = year.chars().count();
    if count <= 2 {
        return year;
    }
    let start = year
        .char_indices()
        .nth(count - 2)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &year[start..]
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn current_year() -> String {
    Local::now().year().to_string()
}
