//! Environment and rendering configuration.
//!
//! Configuration is via the environment and one optional file:
//! - `NOWNEXT_DIR` - Directory holding `tasks.yaml` and `config.yaml` (required)
//! - `<dir>/config.yaml` - Rendering options, e.g. `style: color_block`

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::render::RenderStyle;

/// Environment variable naming the task directory.
pub const TASK_DIR_VAR: &str = "NOWNEXT_DIR";

const CONFIG_FILE: &str = "config.yaml";

/// Resolve the task directory from the environment.
pub fn task_dir_from_env() -> Result<PathBuf, ConfigError> {
    task_dir_from(std::env::var_os(TASK_DIR_VAR))
}

fn task_dir_from(value: Option<std::ffi::OsString>) -> Result<PathBuf, ConfigError> {
    match value {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => Err(ConfigError::MissingTaskDir(TASK_DIR_VAR)),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How `status` output is rendered.
    #[serde(default)]
    pub style: RenderStyle,
}

impl Config {
    /// Load `config.yaml` from the task directory.
    /// Returns the default config if the file doesn't exist or is blank.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml_bw::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unset_dir_is_an_error() {
        assert!(matches!(
            task_dir_from(None),
            Err(ConfigError::MissingTaskDir(TASK_DIR_VAR))
        ));
    }

    #[test]
    fn test_empty_dir_is_an_error() {
        assert!(task_dir_from(Some("".into())).is_err());
    }

    #[test]
    fn test_missing_config_uses_plain_style() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.style, RenderStyle::Plain);
    }

    #[test]
    fn test_reads_style() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "style: color_block\n").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.style, RenderStyle::ColorBlock);
    }

    #[test]
    fn test_unknown_style_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "style: sparkly\n").unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
