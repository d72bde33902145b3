use habitchart_core::month::capitalize;
use habitchart_core::{describe, Report, YearResult};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled, Debug, PartialEq)]
pub struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Days")]
    days: usize,
    #[tabled(rename = "Habits")]
    habits: usize,
    #[tabled(rename = "Yes")]
    yes: u64,
    #[tabled(rename = "Avg")]
    average: String,
    #[tabled(rename = "Best day")]
    best: String,
}

impl MonthRow {
    fn from_report(report: &Report) -> Self {
        let average = report
            .average_fraction()
            .map(|a| format!("{:.0}%", a * 100.0))
            .unwrap_or_else(|| "-".to_string());
        let best = report
            .best_day()
            .map(|d| describe(d.activity.yes_count, &d.day, report.month()))
            .unwrap_or_else(|| "-".to_string());

        Self {
            month: capitalize(report.month()),
            days: report.data.len(),
            habits: report.habit_names().len(),
            yes: report.yes_total(),
            average,
            best,
        }
    }
}

pub fn summary_rows(result: &YearResult) -> Vec<MonthRow> {
    result.reports.iter().map(MonthRow::from_report).collect()
}

pub fn show_summary(result: &YearResult) {
    if result.is_empty() {
        println!("No data found for {}.", result.meta.year);
        return;
    }

    println!(
        "\x1b[1;36m{}\x1b[0m ({} habits done over {} days)",
        result.meta.year,
        result.meta.total_yes_count,
        result.day_count()
    );

    let mut table = Table::new(summary_rows(result));
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use habitchart_core::build_report;
    use habitchart_core::model::year::YearMeta;

    fn year_of(reports: Vec<Report>) -> YearResult {
        let total = reports.iter().map(|r| r.yes_total()).sum();
        YearResult {
            reports,
            meta: YearMeta {
                total_yes_count: total,
                year: "2020".to_string(),
                available_years: vec!["2020".to_string()],
            },
        }
    }

    #[test]
    fn test_summary_rows() {
        let january = build_report("january_20.csv", "day,gym,read\n1,Yes,No\n2,Yes,Yes\n").unwrap();
        let rows = summary_rows(&year_of(vec![january]));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].month, "January");
        assert_eq!(rows[0].days, 2);
        assert_eq!(rows[0].habits, 2);
        assert_eq!(rows[0].yes, 3);
        assert_eq!(rows[0].average, "75%");
        assert_eq!(rows[0].best, "2 habits on 2 January");
    }

    #[test]
    fn test_idle_month() {
        let march = build_report("march_20.csv", "day\n1\n").unwrap();
        let rows = summary_rows(&year_of(vec![march]));
        assert_eq!(rows[0].habits, 0);
        assert_eq!(rows[0].average, "-");
        assert_eq!(rows[0].best, "-");
    }
}
