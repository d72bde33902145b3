use habitchart_core::{describe, DayRecord, Report, YearMeta, YearResult};

use crate::theme::Theme;

/// Calendar view state. The year data itself is rebuilt on every switch.
pub struct App {
    pub result: YearResult,
    pub years: Vec<String>,
    pub year_index: usize,
    pub theme: Theme,
    pub month: usize,
    pub day: usize,
    /// Set when the current year failed to load; the calendar is hidden.
    pub error: Option<String>,
}

impl App {
    pub fn new(result: YearResult, theme: Theme) -> App {
        let years = result.meta.available_years.clone();
        let year_index = years
            .iter()
            .position(|y| *y == result.meta.year)
            .unwrap_or(0);
        App {
            result,
            years,
            year_index,
            theme,
            month: 0,
            day: 0,
            error: None,
        }
    }

    pub fn year(&self) -> &str {
        self.years
            .get(self.year_index)
            .map(String::as_str)
            .unwrap_or(self.result.meta.year.as_str())
    }

    pub fn selected_report(&self) -> Option<&Report> {
        if self.error.is_some() {
            return None;
        }
        self.result.reports.get(self.month)
    }

    pub fn selected(&self) -> Option<(&Report, &DayRecord)> {
        let report = self.selected_report()?;
        report.data.get(self.day).map(|day| (report, day))
    }

    /// Tooltip for the highlighted day.
    pub fn tooltip(&self) -> Option<String> {
        self.selected()
            .map(|(report, day)| describe(day.activity.yes_count, &day.day, report.month()))
    }

    fn days_in_month(&self) -> usize {
        self.selected_report().map(|r| r.data.len()).unwrap_or(0)
    }

    pub fn next_day(&mut self) {
        let days = self.days_in_month();
        if days > 0 && self.day < days - 1 {
            self.day += 1;
        } else if self.month + 1 < self.result.reports.len() {
            self.month += 1;
            self.day = 0;
        }
    }

    pub fn previous_day(&mut self) {
        if self.day > 0 {
            self.day -= 1;
        } else if self.month > 0 {
            self.month -= 1;
            self.day = self.days_in_month().saturating_sub(1);
        }
    }

    pub fn next_month(&mut self) {
        if self.month + 1 < self.result.reports.len() {
            self.month += 1;
            self.clamp_day();
        }
    }

    pub fn previous_month(&mut self) {
        if self.month > 0 {
            self.month -= 1;
            self.clamp_day();
        }
    }

    fn clamp_day(&mut self) {
        self.day = self.day.min(self.days_in_month().saturating_sub(1));
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Year `step` places away in the configured list, if there is one.
    pub fn year_at(&self, step: isize) -> Option<(usize, String)> {
        let index = self.year_index.checked_add_signed(step)?;
        self.years.get(index).map(|y| (index, y.clone()))
    }

    pub fn load(&mut self, index: usize, result: YearResult) {
        self.year_index = index;
        self.result = result;
        self.month = 0;
        self.day = 0;
        self.error = None;
    }

    /// Drops the previous year's data so nothing of it is shown for `index`.
    pub fn fail(&mut self, index: usize, message: String) {
        self.year_index = index;
        self.result = YearResult {
            reports: Vec::new(),
            meta: YearMeta {
                total_yes_count: 0,
                year: self.year().to_string(),
                available_years: self.years.clone(),
            },
        };
        self.error = Some(message);
        self.month = 0;
        self.day = 0;
    }
}
