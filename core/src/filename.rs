use crate::error::{HabitError, Result};
use crate::model::report::ReportDate;

/// Extension every monthly data file carries.
pub const DATA_EXTENSION: &str = "csv";

/// Parses `<month>_<year>.<ext>` into a [`ReportDate`].
///
/// The stem ends at the first `.`. The month is everything before the first
/// `_` and the year everything after it, so `"may_2020_b.csv"` yields
/// `("may", "2020_b")`. Neither part is checked against a calendar.
pub fn parse_filename(name: &str) -> Result<ReportDate> {
    let stem = name.split('.').next().unwrap_or_default();
    match stem.split_once('_') {
        Some((month, year)) if !month.is_empty() && !year.is_empty() => Ok(ReportDate {
            month: month.to_string(),
            year: year.to_string(),
        }),
        _ => Err(HabitError::MalformedFilename {
            filename: name.to_string(),
        }),
    }
}

/// True when `name` is a data file for the given two-digit year.
pub fn matches_year(name: &str, short_year: &str) -> bool {
    name.ends_with(&format!("_{}.{}", short_year, DATA_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let date = parse_filename("january_20.csv").unwrap();
        assert_eq!(date.month, "january");
        assert_eq!(date.year, "20");
    }

    #[test]
    fn test_parse_full_year_and_extra_dots() {
        let date = parse_filename("march_2021.backup.csv").unwrap();
        assert_eq!(date.month, "march");
        assert_eq!(date.year, "2021");
    }

    #[test]
    fn test_parse_splits_on_first_underscore() {
        let date = parse_filename("may_20_old.csv").unwrap();
        assert_eq!(date.month, "may");
        assert_eq!(date.year, "20_old");
    }

    #[test]
    fn test_month_is_not_validated() {
        let date = parse_filename("smarch_20.csv").unwrap();
        assert_eq!(date.month, "smarch");
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            parse_filename("january.csv"),
            Err(HabitError::MalformedFilename { .. })
        ));
        assert!(parse_filename("_20.csv").is_err());
        assert!(parse_filename("january_.csv").is_err());
        assert!(parse_filename("").is_err());
    }

    #[test]
    fn test_matches_year() {
        assert!(matches_year("january_20.csv", "20"));
        assert!(!matches_year("january_21.csv", "20"));
        assert!(!matches_year("january_20.txt", "20"));
        assert!(!matches_year("january_120.csv", "20"));
    }
}
