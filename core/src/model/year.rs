use serde::{Deserialize, Serialize};

use crate::model::report::Report;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearMeta {
    pub total_yes_count: u64,
    pub year: String,
    pub available_years: Vec<String>,
}

/// Everything the renderers need for one year. Rebuilt on every request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct YearResult {
    pub reports: Vec<Report>,
    pub meta: YearMeta,
}

impl YearResult {
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn day_count(&self) -> usize {
        self.reports.iter().map(|r| r.data.len()).sum()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
