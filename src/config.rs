//! Configuration handling for the admin console

use crate::state::User;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default platform API address
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// User configuration for the console
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdminConfig {
    /// Base URL of the platform API
    pub api_base_url: Option<String>,
    /// Bearer token attached to every request
    pub auth_token: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Minimum admin password length
    pub min_password_length: Option<usize>,
    /// Signed-in identity
    pub user: Option<User>,
}

impl AdminConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "storefront", "storefront-admin")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        config.apply_overrides(
            std::env::var("STOREFRONT_API_URL").ok(),
            std::env::var("STOREFRONT_API_TOKEN").ok(),
        );
        Ok(config)
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    fn apply_overrides(&mut self, api_url: Option<String>, token: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.is_empty()) {
            self.api_base_url = Some(url);
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.auth_token = Some(token);
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
            .unwrap_or(DEFAULT_MIN_PASSWORD_LENGTH)
    }
}
