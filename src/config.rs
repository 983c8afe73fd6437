use crate::log_debug;

use anyhow::{Context, Result, anyhow};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration structure for gitmoji-selector
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Pretty-print JSON suggestions with two-space indentation
    #[serde(default = "default_true")]
    pub pretty_json: bool,
    /// Colorize the rule listing
    #[serde(default = "default_true")]
    pub color: bool,
    /// Whether to let logs from other crates through
    #[serde(default)]
    pub verbose_logging: bool,
    /// Flag indicating if this config is from a project file
    #[serde(skip)]
    pub is_project_config: bool,
}

/// Project-level settings; only the fields present in the file override
#[derive(Deserialize, Clone, Debug, Default)]
struct ProjectOverrides {
    pretty_json: Option<bool>,
    color: Option<bool>,
    verbose_logging: Option<bool>,
}

fn default_true() -> bool {
    true
}

/// Project configuration filename
pub const PROJECT_CONFIG_FILENAME: &str = ".gitmojiconfig";

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty_json: true,
            color: true,
            verbose_logging: false,
            is_project_config: false,
        }
    }
}

impl Config {
    /// Load the personal config, then merge the project config over it
    pub fn load() -> Result<Self> {
        let mut config = match Self::get_config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };

        let project_path = Self::get_project_config_path()?;
        if project_path.exists() {
            config.merge_project_file(&project_path)?;
        }

        log_debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Load a single config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow!(
                "Invalid configuration file format in {}: {}",
                path.display(),
                e
            )
        })?;
        Ok(config)
    }

    /// Merge a project config file, with project settings taking precedence
    pub fn merge_project_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project config file {}", path.display()))?;
        let overrides: ProjectOverrides = toml::from_str(&content).map_err(|e| {
            anyhow!(
                "Invalid project configuration file format: {}. Please check your {} file for syntax errors.",
                e,
                PROJECT_CONFIG_FILENAME
            )
        })?;

        log_debug!("Merging with project configuration");
        if let Some(pretty_json) = overrides.pretty_json {
            self.pretty_json = pretty_json;
        }
        if let Some(color) = overrides.color {
            self.color = color;
        }
        if let Some(verbose_logging) = overrides.verbose_logging {
            self.verbose_logging = verbose_logging;
        }
        self.is_project_config = true;
        Ok(())
    }

    /// Save the configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        log_debug!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Path to the personal configuration file, if the platform has a config dir
    pub fn get_config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("gitmoji-selector").join("config.toml"))
    }

    /// Path to the project configuration file in the working directory
    pub fn get_project_config_path() -> Result<PathBuf> {
        let cwd = std::env::current_dir().context("Unable to determine working directory")?;
        Ok(cwd.join(PROJECT_CONFIG_FILENAME))
    }
}
