//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings and custom work schedules from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calendar::{LunarConverter, WorkdayCalendar};
use crate::error::{EngineError, EngineResult};
use crate::models::WorkSchedule;

use super::types::EngineConfig;

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/cn/
/// ├── engine.yaml          # Cache sizes, UTC offset, today handling
/// └── schedules/           # Optional
///     └── four_day_week.yaml  # Custom schedule with id "four_day_week"
/// ```
///
/// # Example
///
/// ```no_run
/// use cn_workday::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/cn")?;
/// let mut calendar = loader.calendar()?;
/// println!("Schedules: {:?}", calendar.available_schedules());
/// # Ok::<(), cn_workday::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
    schedules: BTreeMap<String, WorkSchedule>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` is missing
    /// - Any file contains invalid YAML
    /// - Any engine setting is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let config = Self::load_yaml::<EngineConfig>(&path.join("engine.yaml"))?;
        config.validate()?;

        let schedules = Self::load_schedules(&path.join("schedules"))?;
        debug!(
            path = %path.display(),
            schedules = schedules.len(),
            "loaded engine configuration"
        );

        Ok(Self { config, schedules })
    }

    /// A loader holding `config` and no schedules, without touching the filesystem.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            schedules: BTreeMap::new(),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every schedule file; a missing directory means no schedules.
    fn load_schedules(schedules_dir: &Path) -> EngineResult<BTreeMap<String, WorkSchedule>> {
        let mut schedules = BTreeMap::new();
        if !schedules_dir.exists() {
            return Ok(schedules);
        }

        let dir_str = schedules_dir.display().to_string();
        let entries = fs::read_dir(schedules_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "yaml") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let schedule = Self::load_yaml::<WorkSchedule>(&path)?;
            schedules.insert(id.to_string(), schedule);
        }

        Ok(schedules)
    }

    /// Returns the engine settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns every loaded schedule keyed by id.
    pub fn schedules(&self) -> &BTreeMap<String, WorkSchedule> {
        &self.schedules
    }

    /// Gets a schedule by id.
    pub fn schedule(&self, id: &str) -> Option<&WorkSchedule> {
        self.schedules.get(id)
    }

    /// A classification engine with the loaded schedules registered.
    pub fn calendar(&self) -> EngineResult<WorkdayCalendar> {
        let mut calendar = self.config.calendar()?;
        for (id, schedule) in &self.schedules {
            calendar.set_work_schedule(id.clone(), schedule.clone());
        }
        Ok(calendar)
    }

    /// A lunar converter with the configured cache size and offset.
    pub fn lunar_converter(&self) -> EngineResult<LunarConverter> {
        self.config.lunar_converter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use tempfile::TempDir;

    fn config_path() -> &'static str {
        "./config/cn"
    }

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config(), &EngineConfig::default());
        assert!(loader.schedule("four_day_week").is_some());
    }

    #[test]
    fn test_shipped_schedule_is_usable() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let mut calendar = loader.calendar().unwrap();

        assert!(calendar
            .available_schedules()
            .contains(&"four_day_week"));
        // Friday off under a four-day week
        assert!(!calendar
            .is_workday_custom("2024-03-08", "four_day_week")
            .unwrap());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_missing_schedules_directory_is_allowed() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "engine.yaml", "cache_capacity: 10\n");

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loader.config().cache_capacity, 10);
        assert!(loader.schedules().is_empty());
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "engine.yaml", "cache_capacity: [unclosed\n");

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("engine.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_value_returns_invalid_config() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "engine.yaml", "cache_capacity: 0\n");

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::InvalidConfig { field, .. }) if field == "cache_capacity"
        ));
    }

    #[test]
    fn test_schedules_are_keyed_by_file_stem() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "engine.yaml", "{}\n");
        write(
            dir.path(),
            "schedules/night_shift.yaml",
            "workdays: [Sat, Sun]\nholidays: [2024-03-09]\n",
        );
        write(dir.path(), "schedules/notes.txt", "ignored");

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loader.schedules().len(), 1);

        let schedule = loader.schedule("night_shift").unwrap();
        assert_eq!(schedule.workdays, vec![Weekday::Sat, Weekday::Sun]);

        let mut calendar = loader.calendar().unwrap();
        assert!(!calendar.is_workday_custom("2024-03-09", "night_shift").unwrap());
        assert!(calendar.is_workday_custom("2024-03-10", "night_shift").unwrap());
    }

    #[test]
    fn test_bad_schedule_file_fails_the_load() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "engine.yaml", "{}\n");
        write(dir.path(), "schedules/broken.yaml", "workdays: [Someday]\n");

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_from_config_validates() {
        let config = EngineConfig {
            cache_capacity: 0,
            ..EngineConfig::default()
        };
        assert!(ConfigLoader::from_config(config).is_err());
        assert!(ConfigLoader::from_config(EngineConfig::default()).is_ok());
    }
}
