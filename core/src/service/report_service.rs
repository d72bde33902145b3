use csv::ReaderBuilder;
use tracing::debug;

use crate::activity::{calculate_activity, RawRow};
use crate::error::{HabitError, Result};
use crate::filename::parse_filename;
use crate::model::report::{DayRecord, Report, ReportMeta};

/// Parses one month's CSV text into a [`Report`].
///
/// The header row names the columns; the first column is the day label and
/// every other column is a habit. Rows keep file order. A row whose field
/// count differs from the header's fails the whole report.
pub fn build_report(filename: &str, csv_text: &str) -> Result<Report> {
    let date = parse_filename(filename)?;

    if let Some(line) = unterminated_quote_line(csv_text) {
        return Err(HabitError::CsvParse {
            filename: filename.to_string(),
            line,
            message: "unterminated quoted field".to_string(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());

    let fields: Vec<String> = reader
        .headers()
        .map_err(|e| HabitError::csv(filename, &e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut data = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| HabitError::csv(filename, &e))?;
        let row = RawRow::new(
            fields
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string))
                .collect(),
        );
        data.push(DayRecord {
            day: row.day().to_string(),
            activity: calculate_activity(&row),
        });
    }

    debug!(filename, days = data.len(), habits = fields.len().saturating_sub(1), "built report");

    Ok(Report {
        id: filename.to_string(),
        data,
        meta: ReportMeta { date, fields },
    })
}

/// Line of a quoted field left open at end of input, if any.
///
/// The csv reader accepts such input and folds every following row into the
/// open field. An escaped `""` closes and reopens on the same field, so the
/// opening line is kept across it.
fn unterminated_quote_line(text: &str) -> Option<u64> {
    let mut line = 1;
    let mut open_line = 1;
    let mut in_quote = false;
    let mut prev_quote = false;
    for c in text.chars() {
        if c == '"' {
            if in_quote {
                in_quote = false;
            } else {
                if !prev_quote {
                    open_line = line;
                }
                in_quote = true;
            }
            prev_quote = true;
            continue;
        }
        if c == '\n' {
            line += 1;
        }
        prev_quote = false;
    }
    in_quote.then_some(open_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_simple() {
        let report = build_report("january_20.csv", "day,gym,read\n1,Yes,No\n2,No,No\n").unwrap();
        assert_eq!(report.id, "january_20.csv");
        assert_eq!(report.meta.date.month, "january");
        assert_eq!(report.meta.date.year, "20");
        assert_eq!(report.meta.fields, vec!["day", "gym", "read"]);
        assert_eq!(report.data.len(), 2);
        assert_eq!(report.data[0].day, "1");
        assert_eq!(report.data[0].activity.yes_count, 1);
        assert_eq!(report.data[0].activity.fraction, 0.5);
        assert_eq!(report.data[1].activity.yes_count, 0);
        assert_eq!(report.data[1].activity.fraction, 0.0);
    }

    #[test]
    fn test_day_taken_from_first_column_whatever_its_name() {
        let report = build_report("may_21.csv", "Date,Walk\nMon 1,Yes\nTue 2,No\n").unwrap();
        assert_eq!(report.data[0].day, "Mon 1");
        assert_eq!(report.data[1].day, "Tue 2");
    }

    #[test]
    fn test_row_order_is_file_order() {
        let report = build_report("may_21.csv", "day,walk\n3,Yes\n1,No\n2,Yes\n").unwrap();
        let days: Vec<&str> = report.data.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_quoted_fields() {
        let text = "day,\"read, 20 pages\",gym\n\"1\",Yes,\"Yes\"\n";
        let report = build_report("april_20.csv", text).unwrap();
        assert_eq!(report.meta.fields[1], "read, 20 pages");
        assert_eq!(report.data[0].activity.yes_count, 2);
        assert_eq!(report.data[0].activity.fraction, 1.0);
    }

    #[test]
    fn test_header_only_file_has_no_days() {
        let report = build_report("june_20.csv", "day,gym\n").unwrap();
        assert!(report.data.is_empty());
        assert_eq!(report.meta.fields.len(), 2);
    }

    #[test]
    fn test_day_column_only_is_undefined() {
        let report = build_report("june_20.csv", "day\n1\n2\n").unwrap();
        assert_eq!(report.data.len(), 2);
        assert!(!report.data[0].activity.is_defined());
    }

    #[test]
    fn test_ragged_row_fails() {
        let err = build_report("july_20.csv", "day,gym\n1,Yes\n2,Yes,No\n").unwrap_err();
        match err {
            HabitError::CsvParse { filename, line, .. } => {
                assert_eq!(filename, "july_20.csv");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_quote_fails() {
        let err = build_report("june_20.csv", "day,gym\n1,\"Yes\n2,No\n3,Yes\n").unwrap_err();
        match err {
            HabitError::CsvParse { filename, line, message } => {
                assert_eq!(filename, "june_20.csv");
                assert_eq!(line, 2);
                assert!(message.contains("unterminated"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_escaped_quotes_are_accepted() {
        let text = "day,\"say \"\"hi\"\"\"\n1,Yes\n\"2\",\"No \"\"really\"\"\"\n";
        let report = build_report("june_20.csv", text).unwrap();
        assert_eq!(report.meta.fields[1], "say \"hi\"");
        assert_eq!(report.data.len(), 2);
        assert_eq!(report.data[0].activity.yes_count, 1);
    }

    #[test]
    fn test_malformed_filename_fails() {
        assert!(matches!(
            build_report("july.csv", "day,gym\n1,Yes\n"),
            Err(HabitError::MalformedFilename { .. })
        ));
    }
}
