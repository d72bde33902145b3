use crate::model::report::DayActivity;

/// Literal cell value that marks a habit as done.
pub const DONE: &str = "Yes";

/// One CSV row as ordered `(column, value)` pairs. Position 0 is the day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Number of cells, day included.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Value of the first column, whatever its name.
    pub fn day(&self) -> &str {
        self.cells.first().map(|(_, v)| v.as_str()).unwrap_or("")
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }
}

/// Reduces a row to its yes count and completion fraction.
///
/// Every cell equal to `"Yes"` counts, the day cell included; only the
/// divisor leaves the day column out. A row without habit columns yields an
/// undefined activity rather than a NaN.
pub fn calculate_activity(row: &RawRow) -> DayActivity {
    let yes_count = row.values().filter(|v| *v == DONE).count() as u32;
    let habits = row.width().saturating_sub(1);
    if habits == 0 {
        return DayActivity::undefined(yes_count);
    }
    DayActivity::new(
        yes_count,
        round_significant(yes_count as f64 / habits as f64),
    )
}

/// Rounds the exact stored value to one significant digit. Only a value
/// exactly halfway between two digits rounds up; `0.85` is stored just below
/// the tie and gives `0.8`.
pub fn round_significant(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let expanded = format!("{:.40e}", value.abs());
    let Some((mantissa, exponent)) = expanded.split_once('e') else {
        return value;
    };
    let mut digits = mantissa.bytes().filter(u8::is_ascii_digit);
    let (Some(lead), Some(next)) = (digits.next(), digits.next()) else {
        return value;
    };
    let digit = u32::from(lead - b'0') + u32::from(next >= b'5');
    format!("{}e{}", digit, exponent)
        .parse::<f64>()
        .map(|rounded| rounded.copysign(value))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        RawRow::from_pairs(cells.iter().copied())
    }

    #[test]
    fn test_counts_yes_cells() {
        let activity = calculate_activity(&row(&[("day", "1"), ("gym", "Yes"), ("read", "No")]));
        assert_eq!(activity.yes_count, 1);
        assert_eq!(activity.fraction, 0.5);
        assert!(activity.is_defined());
    }

    #[test]
    fn test_only_exact_yes_counts() {
        let activity = calculate_activity(&row(&[
            ("day", "1"),
            ("a", "yes"),
            ("b", "YES"),
            ("c", " Yes"),
            ("d", ""),
            ("e", "Yes"),
        ]));
        assert_eq!(activity.yes_count, 1);
        assert_eq!(activity.fraction, 0.2);
    }

    #[test]
    fn test_day_column_is_excluded_by_position_only() {
        let activity = calculate_activity(&row(&[("label", "Yes"), ("gym", "Yes")]));
        assert_eq!(activity.yes_count, 2);
        assert_eq!(activity.fraction, 2.0);
    }

    #[test]
    fn test_column_order_does_not_change_count() {
        let a = calculate_activity(&row(&[("day", "3"), ("x", "Yes"), ("y", "No"), ("z", "Yes")]));
        let b = calculate_activity(&row(&[("z", "Yes"), ("day", "3"), ("y", "No"), ("x", "Yes")]));
        assert_eq!(a.yes_count, b.yes_count);
    }

    #[test]
    fn test_no_habit_columns_is_undefined() {
        let activity = calculate_activity(&row(&[("day", "1")]));
        assert_eq!(activity.yes_count, 0);
        assert_eq!(activity.fraction, 0.0);
        assert!(!activity.is_defined());

        let activity = calculate_activity(&RawRow::default());
        assert!(!activity.is_defined());
    }

    #[test]
    fn test_round_significant() {
        assert_eq!(round_significant(0.0), 0.0);
        assert_eq!(round_significant(1.0), 1.0);
        assert_eq!(round_significant(0.5), 0.5);
        assert_eq!(round_significant(1.0 / 3.0), 0.3);
        assert_eq!(round_significant(2.0 / 3.0), 0.7);
        assert_eq!(round_significant(0.25), 0.3);
        assert_eq!(round_significant(0.75), 0.8);
        assert_eq!(round_significant(1.0 / 7.0), 0.1);
        assert_eq!(round_significant(1.0 / 12.0), 0.08);
        assert_eq!(round_significant(0.96), 1.0);
        assert_eq!(round_significant(1.5), 2.0);
    }

    #[test]
    fn test_round_significant_follows_stored_value() {
        // Decimal ties that are not exact in binary round by the stored value.
        assert_eq!(round_significant(17.0 / 20.0), 0.8);
        assert_eq!(round_significant(3.0 / 40.0), 0.07);
        assert_eq!(round_significant(34.0 / 40.0), 0.8);
        assert_eq!(round_significant(51.0 / 60.0), 0.8);
        assert_eq!(round_significant(0.125), 0.1);
        assert!(round_significant(f64::NAN).is_nan());
    }

    #[test]
    fn test_row_accessors() {
        let r = row(&[("date", "Mon 1"), ("gym", "Yes")]);
        assert_eq!(r.day(), "Mon 1");
        assert_eq!(r.get("gym"), Some("Yes"));
        assert_eq!(r.get("day"), None);
        assert_eq!(r.width(), 2);
        assert_eq!(RawRow::default().day(), "");
    }
}
