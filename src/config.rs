// ==========================================
// Skill Assessment Suite - application configuration
// ==========================================
// Small JSON config file: database path override and UI locale.
// Missing file or missing fields fall back to defaults.
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_LOCALE: &str = "fa";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database file path; `None` uses `default_db_path()`.
    pub db_path: Option<String>,
    /// Locale for user-visible messages ("fa" or "en").
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the standard config location; defaults when absent
    /// or unreadable (a broken config file must not brick the app).
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn resolved_db_path(&self) -> String {
        match &self.db_path {
            Some(path) if !path.trim().is_empty() => path.trim().to_string(),
            _ => default_db_path(),
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skill-assessment").join("config.json"))
}

/// Default database path.
///
/// An explicit SKILL_ASSESSMENT_DB_PATH overrides everything (useful
/// for debugging, tests and CI); otherwise the user data directory is
/// used, with a dev-suffixed directory in debug builds so development
/// never pollutes production data.
pub fn default_db_path() -> String {
    if let Ok(path) = std::env::var("SKILL_ASSESSMENT_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./skill_assessment.db");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("skill-assessment-dev");
        }
        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("skill-assessment");
        }
        if let Err(err) = std::fs::create_dir_all(&path) {
            tracing::warn!(error = %err, "could not create data directory, using working directory");
            path = PathBuf::from(".");
        }
        path = path.join("skill_assessment.db");
    }

    path.to_string_lossy().to_string()
}
