//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::language::DEFAULT_LANGUAGE;

const MAX_RECENT_FILES: usize = 10;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Last loaded catalog file
    pub last_file: Option<PathBuf>,
    /// Recent catalog files, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Selected language code
    pub language: String,
    /// Directory holding `lang_<code>.json` packs
    pub lang_dir: Option<PathBuf>,
    /// UI settings
    pub ui: UiConfig,
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme (light/dark)
    pub theme: String,
    /// Result table row height
    pub row_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            last_file: None,
            recent_files: Vec::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            lang_dir: None,
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            row_height: 20.0,
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "itemforge", "Itemforge")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit file, defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Record a successfully loaded file
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path.clone());
        self.recent_files.truncate(MAX_RECENT_FILES);
        self.last_file = Some(path);
    }

    /// Get the language pack directory
    pub fn get_lang_dir(&self) -> PathBuf {
        if let Some(dir) = &self.lang_dir {
            return dir.clone();
        }

        let local = PathBuf::from("lang");
        if local.is_dir() {
            return local;
        }

        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("lang"))
            .unwrap_or(local)
    }

    pub fn is_dark_theme(&self) -> bool {
        self.ui.theme != "light"
    }
}
