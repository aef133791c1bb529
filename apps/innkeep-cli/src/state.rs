//! Application state - the adapters and session shared by every command.

use std::sync::Arc;

use innkeep_core::SessionStore;
use innkeep_core::ports::KeyValueStore;
use innkeep_infra::{ApiClient, JsonFileStore};

use crate::config::AppConfig;

pub struct AppState {
    pub storage: Arc<dyn KeyValueStore>,
    pub api: Arc<ApiClient>,
    pub session: SessionStore,
    pub page_size: u32,
}

impl AppState {
    /// Open the storage file, build the API client and restore any saved session.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(&config.storage_path));
        let api = Arc::new(ApiClient::new(
            config.api_url.clone(),
            config.timeout,
            storage.clone(),
        )?);
        let session = SessionStore::hydrate(storage.clone(), api.clone()).await;

        tracing::debug!(
            api_url = %config.api_url,
            storage = %config.storage_path.display(),
            authenticated = session.is_authenticated(),
            "Application state initialized"
        );

        Ok(Self {
            storage,
            api,
            session,
            page_size: config.page_size,
        })
    }
}
