use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HabitError, Result};
use crate::repository::traits::HabitRepository;

const DEFAULT_DIR_NAME: &str = ".habitchart";
const DEFAULT_DATA_DIR: &str = "data";

/// Reads month files from a directory on disk.
#[derive(Clone, Debug)]
pub struct FileHabitRepository {
    data_dir: PathBuf,
}

impl FileHabitRepository {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        if !data_dir.is_dir() {
            return Err(HabitError::DirectoryNotFound { path: data_dir });
        }
        Ok(FileHabitRepository { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// `~/.habitchart`, where the config and default data directory live.
pub fn app_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| HabitError::Configuration {
        message: "could not determine home directory".to_string(),
    })?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}

pub fn default_data_dir() -> Result<PathBuf> {
    Ok(app_dir()?.join(DEFAULT_DATA_DIR))
}

impl HabitRepository for FileHabitRepository {
    fn list_files(&self) -> Result<Vec<String>> {
        let read_err = |source| HabitError::DirectoryRead {
            path: self.data_dir.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.data_dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        // read_dir order is platform dependent
        names.sort();
        Ok(names)
    }

    fn read_file(&self, filename: &str) -> Result<String> {
        let path = self.data_dir.join(filename);
        fs::read_to_string(&path).map_err(|source| HabitError::FileRead { path, source })
    }
}
