//! Configuration management (<config dir>/config.toml)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::BOARD_SIZE;

/// Which front-end the binary starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    #[default]
    Gui,
    Console,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_board_size")]
    pub board_size: usize,
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,
    #[serde(default = "default_true")]
    pub show_threats: bool,
    #[serde(default)]
    pub frontend: Frontend,
}

fn default_board_size() -> usize { BOARD_SIZE }
fn default_save_path() -> PathBuf { PathBuf::from("save.txt") }
fn default_true() -> bool { true }

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            save_path: default_save_path(),
            show_threats: true,
            frontend: Frontend::default(),
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "gomoku", "gomoku")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default location of `config.toml`
pub fn default_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Load the config from the default location, falling back to defaults
pub fn load() -> Config {
    match default_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Load the config at `path`. A missing file gives the defaults; an unreadable
/// or invalid one is logged and also gives the defaults.
pub fn load_from(path: &Path) -> Config {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Config::default();
        }
        Err(e) => {
            warn!(path = %path.display(), "failed to read config: {}", e);
            return Config::default();
        }
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), "invalid config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn save_to(path: &Path, config: &Config) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.save_path, PathBuf::from("save.txt"));
        assert!(config.show_threats);
        assert_eq!(config.frontend, Frontend::Gui);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("frontend = \"console\"\nboard_size = 19\n").unwrap();
        assert_eq!(config.frontend, Frontend::Console);
        assert_eq!(config.board_size, 19);
        assert!(config.show_threats);
        assert_eq!(config.save_path, PathBuf::from("save.txt"));
    }

    #[test]
    fn test_config_serialize_roundtrip() {
        let config = Config {
            board_size: 9,
            save_path: PathBuf::from("games/last.txt"),
            show_threats: false,
            frontend: Frontend::Console,
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_from_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(load_from(&path), Config::default());

        std::fs::write(&path, "board_size = \"big\"").unwrap();
        assert_eq!(load_from(&path), Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");
        let config = Config {
            show_threats: false,
            ..Config::default()
        };
        save_to(&path, &config).unwrap();
        assert_eq!(load_from(&path), config);
    }
}
