use clap::ValueEnum;

use innkeep_core::ports::{HealthApi, StorageKey};

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

pub async fn health(state: &AppState) -> anyhow::Result<()> {
    let health = state.api.health().await?;
    println!("{} {}", state.api.base_url(), health.status);
    for (key, value) in &health.details {
        println!("  {key}: {value}");
    }
    Ok(())
}

/// Show the stored theme preference, or replace it.
pub async fn theme(state: &AppState, set: Option<Theme>) -> anyhow::Result<()> {
    let key = StorageKey::Theme.as_str();
    match set {
        Some(theme) => {
            state.storage.set(key, theme.as_str()).await?;
            println!("Theme set to {}", theme.as_str());
        }
        None => {
            let current = state.storage.get(key).await?;
            println!("{}", current.as_deref().unwrap_or(Theme::Light.as_str()));
        }
    }
    Ok(())
}
