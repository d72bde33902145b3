pub mod report;
pub mod year;
