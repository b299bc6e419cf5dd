//! Animotion configuration file handling

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use animotion_css::ANIMATED_ELEMENT_SELECTOR;

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = "animotion.toml";

/// Top-level configuration (animotion.toml)
#[derive(Debug, Default, Deserialize)]
pub struct AnimotionConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where history files live
#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    /// History directory; defaults to the platform data directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// How generated CSS is printed
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Selector the `animation:` rule is attached to
    #[serde(default = "default_selector")]
    pub selector: String,
}

fn default_selector() -> String {
    ANIMATED_ELEMENT_SELECTOR.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
        }
    }
}

impl AnimotionConfig {
    /// Load an explicitly requested file; it must exist
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: AnimotionConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Load `animotion.toml` from a directory, falling back to defaults
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        Self::load_from_file(&config_path)
    }

    /// Directory holding the history files
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage.dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("animotion"))
            .context("No platform data directory; set [storage] dir in animotion.toml")
    }
}
