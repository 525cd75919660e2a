use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::commands::engine::DEFAULT_PRECISION;

/// Largest accepted number of fractional digits for area replies
pub const MAX_PRECISION: usize = 6;

fn default_precision() -> usize {
    DEFAULT_PRECISION
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            verbose: default_verbose(),
            precision: default_precision(),
        }
    }
}

impl FileConfig {
    /// Search the usual locations and return the first config that parses
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load a config file the user named explicitly; any failure is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

/// Effective settings after merging CLI flags over the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub verbose: bool,
    pub precision: usize,
}

impl Settings {
    pub fn resolve(file: Option<&FileConfig>, verbose: bool, precision: Option<usize>) -> Self {
        let verbose = verbose || file.map(|c| c.verbose).unwrap_or(false);
        let precision = precision
            .or_else(|| file.map(|c| c.precision))
            .unwrap_or(DEFAULT_PRECISION)
            .min(MAX_PRECISION);
        Self { verbose, precision }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polyquery.toml"));
    paths.push(PathBuf::from(".polyquery.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polyquery").join("config.toml"));
        paths.push(config_dir.join("polyquery.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polyquery.toml"));
        paths.push(home.join(".config").join("polyquery").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.precision, 1);
    }

    #[test]
    fn test_parse_values() {
        let config: FileConfig = toml::from_str("verbose = true\nprecision = 3\n").unwrap();
        assert!(config.verbose);
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<FileConfig>("colour = \"red\"").is_err());
    }

    #[test]
    fn test_load_from() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("polyquery.toml");
        fs::write(&path, "precision = 2\n").unwrap();

        let config = FileConfig::load_from(&path).unwrap();
        assert_eq!(config.precision, 2);

        assert!(FileConfig::load_from(&dir.path().join("missing.toml")).is_err());

        fs::write(&path, "precision = \"two\"\n").unwrap();
        assert!(FileConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_settings_cli_wins() {
        let file = FileConfig {
            verbose: false,
            precision: 4,
        };
        assert_eq!(
            Settings::resolve(Some(&file), true, Some(2)),
            Settings {
                verbose: true,
                precision: 2
            }
        );
        assert_eq!(Settings::resolve(Some(&file), false, None).precision, 4);
        assert_eq!(
            Settings::resolve(None, false, None),
            Settings {
                verbose: false,
                precision: 1
            }
        );
    }

    #[test]
    fn test_settings_clamp_precision() {
        let file = FileConfig {
            verbose: false,
            precision: 40,
        };
        assert_eq!(Settings::resolve(Some(&file), false, None).precision, MAX_PRECISION);
    }

    #[test]
    fn test_config_paths_start_local() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from("polyquery.toml"));
        assert_eq!(paths[1], PathBuf::from(".polyquery.toml"));
    }
}
