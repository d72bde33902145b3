use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HabitError, Result};
use crate::month::current_year;
use crate::repository::file::{app_dir, default_data_dir};
use crate::repository::{CommandDecryptor, Decryptor, PlainDecryptor};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Deployment settings, read once per process.
///
/// ```toml
/// data_dir = "/home/me/habits/data"
/// encrypted_dir = "/home/me/habits/data.encrypted"
/// decrypt_command = ["folder-decrypt", "{input}", "{output}"]
/// available_years = ["2020", "2021"]
/// theme = "blue"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub encrypted_dir: Option<PathBuf>,
    pub decrypt_command: Vec<String>,
    pub available_years: Vec<String>,
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            encrypted_dir: None,
            decrypt_command: Vec::new(),
            available_years: vec![current_year()],
            theme: "green".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| HabitError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if config.available_years.is_empty() {
            return Err(HabitError::ConfigParse {
                path: path.to_path_buf(),
                message: "available_years must list at least one year".to_string(),
            });
        }
        Ok(config)
    }

    /// Loads `path` if given (it must exist), else `~/.habitchart/config.toml`
    /// when present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (app_dir()?.join(CONFIG_FILE_NAME), false),
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loaded config");
                Self::from_toml(&contents, &path)
            }
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(HabitError::FileRead { path, source }),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }

    /// Decryptor to run before reading, matching whether data is encrypted.
    pub fn decryptor(&self) -> Box<dyn Decryptor> {
        if self.encrypted_dir.is_some() {
            Box::new(CommandDecryptor::from_env(self.decrypt_command.clone()))
        } else {
            Box::new(PlainDecryptor)
        }
    }

    pub fn ensure_year_available(&self, year: &str) -> Result<()> {
        if self.available_years.iter().any(|y| y == year) {
            Ok(())
        } else {
            Err(HabitError::Configuration {
                message: format!(
                    "year {} is not configured (available: {})",
                    year,
                    self.available_years.join(", ")
                ),
            })
        }
    }

    /// Most recent configured year.
    pub fn default_year(&self) -> String {
        self.available_years
            .last()
            .cloned()
            .unwrap_or_else(current_year)
    }
}
