//! Language packs for user-facing labels

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Language used when the selected one has no file
pub const DEFAULT_LANGUAGE: &str = "en";

/// Labels every language pack must provide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub enter_item_name: String,
    pub search: String,
    pub edit_item: String,
    pub save_file: String,
    pub load_file: String,
}

/// Result of resolving a language pack
#[derive(Debug, Clone)]
pub struct LoadedLabels {
    pub labels: Labels,
    /// Code of the pack actually loaded
    pub language: String,
    /// Set when the requested pack was missing and the default was used
    pub fell_back: bool,
}

/// Path of the pack for `code` inside `dir`
pub fn language_file(dir: &Path, code: &str) -> PathBuf {
    dir.join(format!("lang_{}.json", code))
}

impl Labels {
    /// Read a single pack file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read language file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid language file: {}", path.display()))
    }

    /// Load the pack for `code`, falling back to the default language when
    /// its file does not exist. Fails if the default is missing too.
    pub fn load(dir: &Path, code: &str) -> Result<LoadedLabels> {
        let requested = language_file(dir, code);
        if requested.is_file() {
            return Ok(LoadedLabels {
                labels: Self::from_file(&requested)?,
                language: code.to_string(),
                fell_back: false,
            });
        }

        tracing::warn!(
            "Language file not found: {}. Defaulting to {}.",
            requested.display(),
            DEFAULT_LANGUAGE
        );
        let fallback = language_file(dir, DEFAULT_LANGUAGE);
        let labels = Self::from_file(&fallback)
            .context("Default language file is missing; cannot start")?;
        Ok(LoadedLabels {
            labels,
            language: DEFAULT_LANGUAGE.to_string(),
            fell_back: code != DEFAULT_LANGUAGE,
        })
    }
}

/// Language codes with a pack in `dir`, sorted
pub fn available_languages(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut codes: Vec<String> = entries
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            name.strip_prefix("lang_")
                .and_then(|rest| rest.strip_suffix(".json"))
                .filter(|code| !code.is_empty())
                .map(str::to_string)
        })
        .collect();
    codes.sort();
    codes
}
