//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use innkeep_core::domain::DEFAULT_PAGE_SIZE;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub storage_path: PathBuf,
    pub page_size: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("INNKEEP_API_URL").unwrap_or_else(|_| "http://localhost".to_string()),
            timeout: Duration::from_millis(
                env::var("INNKEEP_TIMEOUT_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30_000),
            ),
            storage_path: env::var("INNKEEP_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| Self::default_storage_path()),
            page_size: env::var("INNKEEP_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&n: &u32| n > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    fn default_storage_path() -> PathBuf {
        match env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".innkeep").join("storage.json"),
            None => PathBuf::from(".innkeep-storage.json"),
        }
    }
}
