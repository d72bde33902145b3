use tracing::{debug, info, warn};

use crate::error::Result;
use crate::filename::matches_year;
use crate::model::report::Report;
use crate::model::year::{YearMeta, YearResult};
use crate::month::{month_index, short_year};
use crate::repository::HabitRepository;
use crate::service::report_service::build_report;

pub struct YearUseCase<'a, R: HabitRepository> {
    repo: &'a R,
    available_years: &'a [String],
}

impl<'a, R: HabitRepository> YearUseCase<'a, R> {
    pub fn new(repo: &'a R, available_years: &'a [String]) -> Self {
        Self {
            repo,
            available_years,
        }
    }

    /// Builds every report for `year`, January first.
    ///
    /// Files are picked by their `_<yy>.csv` suffix. Reports for the same
    /// month keep listing order, and an unrecognised month sorts before
    /// January. The first unreadable or unparsable file aborts the build.
    pub fn build_year(&self, year: &str) -> Result<YearResult> {
        if !self.available_years.iter().any(|y| y == year) {
            warn!(year, "building a year that is not configured");
        }

        let suffix = short_year(year);
        let filenames: Vec<String> = self
            .repo
            .list_files()?
            .into_iter()
            .filter(|name| matches_year(name, suffix))
            .collect();
        debug!(year, files = filenames.len(), "matched data files");

        let mut total_yes_count: u64 = 0;
        let mut reports: Vec<Report> = Vec::with_capacity(filenames.len());
        for filename in &filenames {
            let text = self.repo.read_file(filename)?;
            let report = build_report(filename, &text)?;
            total_yes_count += report.yes_total();
            reports.push(report);
        }

        // Stable, so same-month reports keep listing order.
        reports.sort_by_key(|r| month_index(r.month()));

        info!(year, reports = reports.len(), total_yes = total_yes_count, "built year");

        Ok(YearResult {
            reports,
            meta: YearMeta {
                total_yes_count,
                year: year.to_string(),
                available_years: self.available_years.to_vec(),
            },
        })
    }

    /// Configured years that have at least one data file.
    pub fn years_with_data(&self) -> Result<Vec<String>> {
        let files = self.repo.list_files()?;
        Ok(self
            .available_years
            .iter()
            .filter(|year| {
                let suffix = short_year(year);
                files.iter().any(|name| matches_year(name, suffix))
            })
            .cloned()
            .collect())
    }
}
