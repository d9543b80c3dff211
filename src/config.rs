// File: ./src/config.rs
// Handles parser configuration loading and defaults.
use crate::model::parser::DEFAULT_SECTION_TITLE;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_section_title() -> String {
    DEFAULT_SECTION_TITLE.to_string()
}

fn default_duration_hours() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Title for tasks that appear before the first heading.
    #[serde(default = "default_section_title")]
    pub default_section_title: String,
    /// Hours assigned when a task line carries no duration marker.
    #[serde(default = "default_duration_hours")]
    pub default_duration_hours: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_section_title: default_section_title(),
            default_duration_hours: default_duration_hours(),
        }
    }
}

impl ParserConfig {
    pub fn from_toml(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw).context("Failed to parse config TOML")?;
        // The parser relies on the fallback duration being a finite
        // number; TOML admits nan/inf floats.
        if !config.default_duration_hours.is_finite() {
            config.default_duration_hours = default_duration_hours();
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        Self::from_toml(&raw).with_context(|| format!("Invalid config: {:?}", path))
    }

    /// Loads the config from the standard OS location, falling back to
    /// defaults when no file exists.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    fn default_path() -> Option<PathBuf> {
        let proj = ProjectDirs::from("com", "todo-parser", "todo-parser")?;
        Some(proj.config_dir().join("config.toml"))
    }
}
