use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_habits_file")]
    pub habits_file: String,
    #[serde(default = "default_check_offs_file")]
    pub check_offs_file: String,
    #[serde(default = "default_max_title")]
    pub max_title_len: usize,
    #[serde(default = "default_max_description")]
    pub max_description_len: usize,
    /// How many recent check-offs `history`, `check` and `uncheck` show.
    #[serde(default = "default_print_number")]
    pub print_number: usize,
    /// How many recent check-offs feed the emotion average and trend.
    #[serde(default = "default_analysis_window")]
    pub analysis_window: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    Config::config_dir().to_string_lossy().to_string()
}
fn default_habits_file() -> String {
    "habits.json".to_string()
}
fn default_check_offs_file() -> String {
    "check_offs.json".to_string()
}
fn default_max_title() -> usize {
    20
}
fn default_max_description() -> usize {
    45
}
fn default_print_number() -> usize {
    5
}
fn default_analysis_window() -> usize {
    5
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            habits_file: default_habits_file(),
            check_offs_file: default_check_offs_file(),
            max_title_len: default_max_title(),
            max_description_len: default_max_description(),
            print_number: default_print_number(),
            analysis_window: default_analysis_window(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rhabits")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rhabits")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhabits.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn habits_path(&self) -> PathBuf {
        self.data_path().join(&self.habits_file)
    }

    pub fn check_offs_path(&self) -> PathBuf {
        self.data_path().join(&self.check_offs_file)
    }

    /// Names of the keys absent from the YAML file at `path`.
    pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let defaults = serde_yaml::to_value(Self::default())?;

        let (Some(present), Some(expected)) = (value.as_mapping(), defaults.as_mapping()) else {
            return Err(AppError::Config(format!(
                "{} is not a YAML mapping",
                path.display()
            )));
        };

        Ok(expected
            .keys()
            .filter(|k| !present.contains_key(*k))
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect())
    }

    /// Initialize configuration and data files
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let config = Config {
            data_dir: custom_dir.unwrap_or_else(default_data_dir),
            ..Self::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty data files if not exist
        fs::create_dir_all(config.data_path())?;
        for path in [config.habits_path(), config.check_offs_path()] {
            if !path.exists() {
                fs::write(&path, "[]")?;
            }
        }

        println!("✅ Data dir:    {:?}", config.data_path());

        Ok(config)
    }
}
