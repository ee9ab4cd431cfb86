use crate::core::calculator::LunchPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::employee::{
    DEFAULT_NORMAL_DAY_HOURS, DEFAULT_SPECIAL_DAY_HOURS, DEFAULT_WEEKLY_CEILING,
    DEFAULT_WEEKLY_DAYS_OFF, Employee,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_weekly_ceiling")]
    pub default_weekly_ceiling: f64,
    #[serde(default = "default_normal_day_hours")]
    pub default_normal_day_hours: f64,
    #[serde(default = "default_special_day_hours")]
    pub default_special_day_hours: f64,
    #[serde(default = "default_weekly_days_off")]
    pub default_weekly_days_off: u32,
    /// Minimum lunch break on normal days, in minutes
    #[serde(default = "default_min_lunch_normal")]
    pub min_lunch_normal: i64,
    /// Minimum lunch break on Sundays and holidays, in minutes
    #[serde(default = "default_min_lunch_special")]
    pub min_lunch_special: i64,
    #[serde(default)]
    pub company_name: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_weekly_ceiling() -> f64 {
    DEFAULT_WEEKLY_CEILING
}
fn default_normal_day_hours() -> f64 {
    DEFAULT_NORMAL_DAY_HOURS
}
fn default_special_day_hours() -> f64 {
    DEFAULT_SPECIAL_DAY_HOURS
}
fn default_weekly_days_off() -> u32 {
    DEFAULT_WEEKLY_DAYS_OFF
}
fn default_min_lunch_normal() -> i64 {
    60
}
fn default_min_lunch_special() -> i64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_weekly_ceiling: default_weekly_ceiling(),
            default_normal_day_hours: default_normal_day_hours(),
            default_special_day_hours: default_special_day_hours(),
            default_weekly_days_off: default_weekly_days_off(),
            min_lunch_normal: default_min_lunch_normal(),
            min_lunch_special: default_min_lunch_special(),
            company_name: String::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rponto")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rponto")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rponto.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rponto.sqlite")
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
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn lunch_policy(&self) -> LunchPolicy {
        LunchPolicy {
            normal_minutes: self.min_lunch_normal,
            special_minutes: self.min_lunch_special,
        }
    }

    /// A new employee carrying the configured default targets.
    pub fn new_employee(&self, name: &str, email: &str) -> Employee {
        let mut e = Employee::new(0, name, email);
        e.weekly_ceiling = self.default_weekly_ceiling;
        e.normal_day_hours = self.default_normal_day_hours;
        e.special_day_hours = self.default_special_day_hours;
        e.weekly_days_off = self.default_weekly_days_off;
        e
    }

    /// Initialize configuration and database files.
    ///
    /// `custom_db` may be absolute or relative to the config directory.
    /// In test mode the config file is not written.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        // keep the other settings of an existing file
        let mut config = Self::load()?;
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("company_name: Piticas\nmin_lunch_normal: 45\n").unwrap();
        assert_eq!(cfg.company_name, "Piticas");
        assert_eq!(cfg.min_lunch_normal, 45);
        assert_eq!(cfg.min_lunch_special, 30);
        assert_eq!(cfg.default_weekly_ceiling, 40.0);
        assert_eq!(cfg.default_weekly_days_off, 2);
    }

    #[test]
    fn lunch_policy_follows_config() {
        let cfg = Config {
            min_lunch_normal: 50,
            min_lunch_special: 20,
            ..Config::default()
        };
        let policy = cfg.lunch_policy();
        assert_eq!(policy.normal_minutes, 50);
        assert_eq!(policy.special_minutes, 20);
    }
}
