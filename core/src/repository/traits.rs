use crate::error::Result;

/// Source of monthly data files.
pub trait HabitRepository {
    /// Filenames (not paths) in the data directory.
    fn list_files(&self) -> Result<Vec<String>>;
    fn read_file(&self, filename: &str) -> Result<String>;
}
