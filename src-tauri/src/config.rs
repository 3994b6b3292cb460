//! Application configuration
//!
//! `<app_config_dir>/config.json`, written with defaults on first start.
//! Environment variables override individual fields.

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";

pub const ENV_USER_ID: &str = "BEFORE30_USER_ID";
pub const ENV_USER_EMAIL: &str = "BEFORE30_USER_EMAIL";
pub const ENV_DB_FILE: &str = "BEFORE30_DB_FILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database file name inside the app data directory
    pub database_file: String,
    /// Signed-in user; empty means signed out
    pub user_id: String,
    pub user_email: Option<String>,
    /// Page size for community browsing
    pub browse_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_file: "before30.db".to_string(),
            user_id: "local".to_string(),
            user_email: None,
            browse_limit: before30_core::actions::DEFAULT_BROWSE_LIMIT,
        }
    }
}

impl AppConfig {
    /// Read the config file, creating it with defaults when missing, then apply env overrides
    pub fn load_or_create(dir: &Path) -> Result<Self, String> {
        let path = dir.join(CONFIG_FILE);
        let config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            serde_json::from_str(&raw)
                .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?
        } else {
            let config = AppConfig::default();
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;
            let raw = serde_json::to_string_pretty(&config).map_err(|e| e.to_string())?;
            std::fs::write(&path, raw)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            log::info!("Wrote default config to {}", path.display());
            config
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(user_id) = lookup(ENV_USER_ID) {
            log::info!("{} set, overriding user", ENV_USER_ID);
            self.user_id = user_id;
        }
        if let Some(email) = lookup(ENV_USER_EMAIL) {
            self.user_email = Some(email).filter(|e| !e.trim().is_empty());
        }
        if let Some(db_file) = lookup(ENV_DB_FILE).filter(|f| !f.trim().is_empty()) {
            self.database_file = db_file;
        }
        self
    }
}
