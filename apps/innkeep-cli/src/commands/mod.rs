//! Subcommand implementations. Each one drives a view and prints what it holds.

pub mod admin;
pub mod auth;
pub mod hotels;
pub mod reservations;
pub mod system;

use chrono::{Local, NaiveDate};

use innkeep_core::views::{Notification, Redirect, Route, Severity};

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{raw}', expected YYYY-MM-DD"))
}

pub(crate) fn announce(notification: &Notification) {
    let tag = match notification.severity {
        Severity::Success => "ok",
        Severity::Info => "info",
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    println!("[{tag}] {}", notification.message);
}

/// Wait out a delayed redirect so its notification stays on screen.
pub(crate) async fn follow(redirect: Redirect) {
    tokio::time::sleep(redirect.after).await;
    println!("-> {}", redirect.route);
}

/// Turn a guard redirect into the error a terminal user should see.
pub(crate) fn refuse(route: Route) -> anyhow::Error {
    match route {
        Route::Login { .. } => anyhow::anyhow!("You need to log in first (innkeep login)"),
        other => anyhow::anyhow!("Not available here; go to {other}"),
    }
}

pub(crate) fn field_errors(errors: &[String]) -> anyhow::Error {
    anyhow::anyhow!(errors.join("\n"))
}
