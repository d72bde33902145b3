use serde::{Deserialize, Serialize};

/// Completion summary of one CSV row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    pub yes_count: u32,
    /// `yes_count / habits`, one significant digit. `0.0` when undefined.
    pub fraction: f64,
    /// Set when the row had no habit columns and the fraction has no meaning.
    #[serde(skip)]
    pub undefined: bool,
}

impl DayActivity {
    pub fn new(yes_count: u32, fraction: f64) -> Self {
        Self {
            yes_count,
            fraction,
            undefined: false,
        }
    }

    pub fn undefined(yes_count: u32) -> Self {
        Self {
            yes_count,
            fraction: 0.0,
            undefined: true,
        }
    }

    pub fn is_defined(&self) -> bool {
        !self.undefined
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayRecord {
    /// Verbatim value of the first column, e.g. `"1"` or `"Mon 1"`.
    pub day: String,
    pub activity: DayActivity,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportDate {
    pub month: String,
    pub year: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReportMeta {
    pub date: ReportDate,
    /// Header columns in file order, day column first.
    pub fields: Vec<String>,
}

/// One month of habit data, built from a single CSV file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    /// Source filename.
    pub id: String,
    pub data: Vec<DayRecord>,
    pub meta: ReportMeta,
}

impl Report {
    pub fn month(&self) -> &str {
        &self.meta.date.month
    }

    pub fn yes_total(&self) -> u64 {
        self.data.iter().map(|d| d.activity.yes_count as u64).sum()
    }

    pub fn habit_names(&self) -> &[String] {
        self.meta.fields.get(1..).unwrap_or(&[])
    }

    /// Mean fraction over days with a defined fraction.
    pub fn average_fraction(&self) -> Option<f64> {
        let defined: Vec<f64> = self
            .data
            .iter()
            .filter(|d| d.activity.is_defined())
            .map(|d| d.activity.fraction)
            .collect();
        if defined.is_empty() {
            return None;
        }
        Some(defined.iter().sum::<f64>() / defined.len() as f64)
    }

    /// First day with the highest yes count, ignoring days with none.
    pub fn best_day(&self) -> Option<&DayRecord> {
        let mut best: Option<&DayRecord> = None;
        for record in &self.data {
            let beats = match best {
                Some(b) => record.activity.yes_count > b.activity.yes_count,
                None => record.activity.yes_count > 0,
            };
            if beats {
                best = Some(record);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: &str, yes_count: u32, fraction: f64) -> DayRecord {
        DayRecord {
            day: day.to_string(),
            activity: DayActivity::new(yes_count, fraction),
        }
    }

    fn report(data: Vec<DayRecord>) -> Report {
        Report {
            id: "june_20.csv".to_string(),
            data,
            meta: ReportMeta {
                date: ReportDate {
                    month: "june".to_string(),
                    year: "20".to_string(),
                },
                fields: vec!["day".to_string(), "gym".to_string(), "read".to_string()],
            },
        }
    }

    #[test]
    fn test_report_helpers() {
        let r = report(vec![
            record("1", 1, 0.5),
            record("2", 2, 1.0),
            record("3", 2, 1.0),
            record("4", 0, 0.0),
        ]);
        assert_eq!(r.month(), "june");
        assert_eq!(r.yes_total(), 5);
        assert_eq!(r.habit_names(), &["gym".to_string(), "read".to_string()]);
        assert_eq!(r.average_fraction(), Some(0.625));
        assert_eq!(r.best_day().map(|d| d.day.as_str()), Some("2"));
    }

    #[test]
    fn test_best_day_none_when_idle() {
        let r = report(vec![record("1", 0, 0.0)]);
        assert!(r.best_day().is_none());
    }

    #[test]
    fn test_average_skips_undefined_days() {
        let mut r = report(vec![]);
        assert_eq!(r.average_fraction(), None);
        r.data.push(DayRecord {
            day: "1".to_string(),
            activity: DayActivity::undefined(0),
        });
        assert_eq!(r.average_fraction(), None);
    }

    #[test]
    fn test_json_field_names() {
        let r = report(vec![record("1", 1, 0.5)]);
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["id"], "june_20.csv");
        assert_eq!(value["data"][0]["day"], "1");
        assert_eq!(value["data"][0]["activity"]["yesCount"], 1);
        assert_eq!(value["data"][0]["activity"]["fraction"], 0.5);
        assert!(value["data"][0]["activity"].get("undefined").is_none());
        assert_eq!(value["meta"]["date"]["month"], "june");
        assert_eq!(value["meta"]["fields"][1], "gym");
    }
}
