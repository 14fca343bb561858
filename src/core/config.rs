use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values plus overrides).
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the configuration file.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {}: defaults are used (run `rhabits init`)",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let missing = Config::missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            for key in &missing {
                warning(format!("Missing field '{}' (default value is used)", key));
            }
        }
        Ok(missing)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&ed).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", ed));
                Ok(())
            }
            _ if ed != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    ed, default_editor
                ));
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!("editor '{}' exited with {}", ed, s))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
