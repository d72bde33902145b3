//! Stateless helpers the renderers use to shade cells and label days.

use serde::{Deserialize, Serialize};

use crate::model::report::DayActivity;
use crate::month::capitalize;

/// Discrete shade of a calendar cell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    None,
    Low,
    MediumLow,
    MediumHigh,
    High,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::None,
        Bucket::Low,
        Bucket::MediumLow,
        Bucket::MediumHigh,
        Bucket::High,
    ];

    /// 0 for no activity, 4 for the darkest shade.
    pub fn level(self) -> usize {
        match self {
            Bucket::None => 0,
            Bucket::Low => 1,
            Bucket::MediumLow => 2,
            Bucket::MediumHigh => 3,
            Bucket::High => 4,
        }
    }

    /// Class name for web renderers; `None` means "leave the cell blank".
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Bucket::None => None,
            Bucket::Low => Some("cube-color-1"),
            Bucket::MediumLow => Some("cube-color-2"),
            Bucket::MediumHigh => Some("cube-color-3"),
            Bucket::High => Some("cube-color-4"),
        }
    }
}

/// Maps a fraction to a bucket. Zero and NaN mean no activity.
pub fn fraction_to_bucket(fraction: f64) -> Bucket {
    if fraction == 0.0 || fraction.is_nan() {
        Bucket::None
    } else if fraction < 0.25 {
        Bucket::Low
    } else if fraction < 0.5 {
        Bucket::MediumLow
    } else if fraction < 0.75 {
        Bucket::MediumHigh
    } else {
        Bucket::High
    }
}

pub fn activity_to_bucket(activity: &DayActivity) -> Bucket {
    if !activity.is_defined() {
        return Bucket::None;
    }
    fraction_to_bucket(activity.fraction)
}

/// Tooltip text, e.g. `"2 habits on 3 March"`.
pub fn describe(yes_count: u32, day: &str, month: &str) -> String {
    let count = if yes_count == 0 {
        "No".to_string()
    } else {
        yes_count.to_string()
    };
    let noun = if yes_count == 1 { "habit" } else { "habits" };
    format!("{} {} on {} {}", count, noun, day, capitalize(month))
}
