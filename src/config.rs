//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the UI language
pub const ENV_LANG: &str = "GAIN_GUIDE_LANG";
/// Environment override for the persistence consent flag
pub const ENV_SAVE_SUBMISSIONS: &str = "GAIN_GUIDE_SAVE_SUBMISSIONS";
/// Environment override for the guide documents directory
pub const ENV_DOCS_DIR: &str = "GAIN_GUIDE_DOCS_DIR";

/// Default location of the bundled guide documents
const DEFAULT_DOCS_DIR: &str = "docs";
const SUBMISSIONS_FILE: &str = "submissions.jsonl";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TuiConfig {
    /// Preferred language tag, e.g. "de" or "en_US"
    pub language: Option<String>,
    /// Whether finished questionnaires may be saved
    pub save_submissions: Option<bool>,
    /// Directory holding the how-to guides
    pub docs_dir: Option<PathBuf>,
    /// Where submissions are appended
    pub submissions_path: Option<PathBuf>,
}

/// Effective settings after defaults and environment overrides
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub language: Option<String>,
    pub save_submissions: bool,
    pub docs_dir: PathBuf,
    pub submissions_path: PathBuf,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "gainguide", "gain-guide-tui")
}

impl TuiConfig {
    /// Get the config file path
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply defaults and overrides from the process environment
    pub fn resolve(&self) -> Settings {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Apply defaults and overrides using `env` to look up variables
    pub fn resolve_with(&self, env: impl Fn(&str) -> Option<String>) -> Settings {
        let language = env(ENV_LANG)
            .or_else(|| self.language.clone())
            .or_else(|| env("LANG"))
            .filter(|lang| !lang.is_empty());

        let save_submissions = env(ENV_SAVE_SUBMISSIONS)
            .and_then(|raw| parse_flag(&raw))
            .or(self.save_submissions)
            .unwrap_or(false);

        let docs_dir = env(ENV_DOCS_DIR)
            .map(PathBuf::from)
            .or_else(|| self.docs_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR));

        let submissions_path = self.submissions_path.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|dirs| dirs.data_dir().join(SUBMISSIONS_FILE))
                .unwrap_or_else(|| PathBuf::from(SUBMISSIONS_FILE))
        });

        Settings {
            language,
            save_submissions,
            docs_dir,
            submissions_path,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!("Ignoring {ENV_SAVE_SUBMISSIONS}={other:?}: expected true/false");
            None
        }
    }
}
