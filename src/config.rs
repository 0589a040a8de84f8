use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "msgheap.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub initial_capacity: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_capacity: 4,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Falls back to `Info` when `log_level` is not a level name.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    pub fn has_valid_log_level(&self) -> bool {
        self.log_level.parse::<log::LevelFilter>().is_ok()
    }
}

pub fn get_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let config_toml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;

    toml::from_str(&config_toml).map_err(|source| ConfigError::Parse {
        path: display,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn it_reads_config_file() {
        let tmp_dir = TempDir::new("config").unwrap();
        let path = tmp_dir.path().join("msgheap.toml");
        fs::write(&path, "initial_capacity = 16\nlog_level = \"debug\"\n").unwrap();

        let cfg = get_config(&path).unwrap();

        assert_eq!(cfg.initial_capacity, 16);
        assert_eq!(cfg.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn it_fills_missing_fields_with_defaults() {
        let tmp_dir = TempDir::new("config").unwrap();
        let path = tmp_dir.path().join("msgheap.toml");
        fs::write(&path, "initial_capacity = 2\n").unwrap();

        let cfg = get_config(&path).unwrap();

        assert_eq!(cfg.initial_capacity, 2);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn it_reports_missing_and_malformed_files() {
        let tmp_dir = TempDir::new("config").unwrap();
        let missing = tmp_dir.path().join("absent.toml");
        assert!(matches!(get_config(&missing), Err(ConfigError::Io { .. })));

        let bad = tmp_dir.path().join("bad.toml");
        fs::write(&bad, "initial_capacity = \"lots\"\n").unwrap();
        assert!(matches!(get_config(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn it_falls_back_on_unknown_log_level() {
        let cfg = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert!(!cfg.has_valid_log_level());
        assert_eq!(cfg.level_filter(), log::LevelFilter::Info);
        assert!(Config::default().has_valid_log_level());
    }
}
