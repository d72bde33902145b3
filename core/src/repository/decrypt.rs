use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{HabitError, Result};

/// Environment variable the decryption password is read from and handed on in.
pub const PASSWORD_ENV: &str = "HABITCHART_PASSWORD";

/// Produces a plaintext data directory before any file is listed or read.
pub trait Decryptor {
    fn decrypt(&self, input: &Path, output: &Path) -> Result<()>;
}

/// For data that is stored unencrypted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDecryptor;

impl Decryptor for PlainDecryptor {
    fn decrypt(&self, _input: &Path, _output: &Path) -> Result<()> {
        Ok(())
    }
}

/// Delegates to an external program, e.g. `["age", "-d", "-o", "{output}", "{input}"]`.
///
/// `{input}` and `{output}` in the arguments are replaced with the directory
/// paths. The password reaches the child through [`PASSWORD_ENV`].
#[derive(Debug, Clone)]
pub struct CommandDecryptor {
    argv: Vec<String>,
    password: Option<String>,
}

impl CommandDecryptor {
    pub fn new(argv: Vec<String>, password: Option<String>) -> Self {
        Self { argv, password }
    }

    pub fn from_env(argv: Vec<String>) -> Self {
        Self::new(argv, std::env::var(PASSWORD_ENV).ok())
    }

    fn expand(&self, input: &Path, output: &Path) -> Vec<String> {
        let input = input.display().to_string();
        let output = output.display().to_string();
        self.argv
            .iter()
            .map(|arg| arg.replace("{input}", &input).replace("{output}", &output))
            .collect()
    }
}

impl Decryptor for CommandDecryptor {
    fn decrypt(&self, input: &Path, output: &Path) -> Result<()> {
        let password = match self.password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => {
                return Err(HabitError::Decryption {
                    reason: format!("no password set ({} is empty)", PASSWORD_ENV),
                })
            }
        };
        if !input.exists() {
            return Err(HabitError::Decryption {
                reason: format!("encrypted data not found at {}", input.display()),
            });
        }

        let argv = self.expand(input, output);
        let Some((program, args)) = argv.split_first() else {
            return Err(HabitError::Decryption {
                reason: "decrypt_command is empty".to_string(),
            });
        };

        fs::create_dir_all(output).map_err(|e| HabitError::Decryption {
            reason: format!("cannot create {}: {}", output.display(), e),
        })?;

        debug!(program = %program, input = %input.display(), "running decryptor");
        let result = Command::new(program)
            .args(args)
            .env(PASSWORD_ENV, password)
            .output()
            .map_err(|e| HabitError::Decryption {
                reason: format!("failed to run {}: {}", program, e),
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(HabitError::Decryption {
                reason: format!("{} exited with {}: {}", program, result.status, stderr.trim()),
            });
        }

        info!(output = %output.display(), "decrypted data directory");
        Ok(())
    }
}
