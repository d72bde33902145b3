use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::repository::FileHabitRepository;

/// Decrypts the data directory if the config asks for it, then opens it.
///
/// Decryption happens once here, before anything is listed or read.
pub fn open_repository(config: &Config) -> Result<FileHabitRepository> {
    let data_dir = config.data_dir()?;
    if let Some(encrypted_dir) = &config.encrypted_dir {
        info!(from = %encrypted_dir.display(), to = %data_dir.display(), "decrypting data");
        config.decryptor().decrypt(encrypted_dir, &data_dir)?;
    }
    FileHabitRepository::new(Some(data_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HabitError;
    use crate::repository::HabitRepository;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_plain_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("january_20.csv"), "day,gym\n1,Yes\n").unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let repo = open_repository(&config).unwrap();
        assert_eq!(repo.list_files().unwrap(), vec!["january_20.csv"]);
    }

    #[test]
    fn test_encrypted_without_command_fails_before_reading() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: Some(dir.path().join("data")),
            encrypted_dir: Some(dir.path().to_path_buf()),
            decrypt_command: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(
            open_repository(&config),
            Err(HabitError::Decryption { .. })
        ));
    }
}
