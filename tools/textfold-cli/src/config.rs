use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use textfold::padding::PadSide;
use textfold::{CaseStyle, DEFAULT_MARKER};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings read from `config.toml`; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub truncate: TruncateConfig,
    pub case: CaseConfig,
    pub pad: PadConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TruncateConfig {
    pub marker: String,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CaseConfig {
    pub style: CaseStyle,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    pub fill: String,
    pub side: PadSide,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            fill: " ".to_string(),
            side: PadSide::Left,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("textfold");
    p.push("config.toml");
    Some(p)
}

impl Config {
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load an explicit path, which must exist, or the default path, which
    /// may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => {
                    tracing::debug!("no config directory on this platform, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::info!("loaded config from {}", path.display());
                Self::from_toml(&path, &contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }
}
