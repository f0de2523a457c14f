use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Deserialize;

use crate::theme::{CategoryColors, ThemeConfig};

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sample_events: bool,
    pub log_level: String,
    pub start_view: StartView,
    pub theme: ThemeConfig,
    pub categories: CategoryColors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Calendar,
    Schedule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_events: true,
            log_level: "info".to_string(),
            start_view: StartView::default(),
            theme: ThemeConfig::default(),
            categories: CategoryColors::default(),
        }
    }
}

impl Config {
    /// Load from the user config dir. A missing file yields the defaults; a
    /// file that fails to parse is an error.
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        match config_path() {
            Some(path) if path.exists() => {
                let config = Self::from_file(&path)?;
                Ok((config, Some(path)))
            }
            _ => Ok((Self::default(), None)),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).wrap_err_with(|| format!("invalid config in {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("planner-tui"))
}

fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}
