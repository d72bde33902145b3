pub mod activity;
pub mod config;
pub mod error;
pub mod filename;
pub mod model;
pub mod month;
pub mod presentation;
pub mod repository;
pub mod service;
pub mod usecase;

pub use activity::{calculate_activity, RawRow};
pub use config::Config;
pub use error::{HabitError, Result};
pub use filename::parse_filename;
pub use model::report::{DayActivity, DayRecord, Report, ReportDate, ReportMeta};
pub use model::year::{YearMeta, YearResult};
pub use presentation::{activity_to_bucket, describe, fraction_to_bucket, Bucket};
pub use repository::{FileHabitRepository, HabitRepository};
pub use service::data_service::open_repository;
pub use service::report_service::build_report;
pub use usecase::year::YearUseCase;
