use innkeep_core::domain::{Role, initials};
use innkeep_core::views::{LoginView, RegisterView};

use super::field_errors;
use crate::state::AppState;

pub async fn login(state: &AppState, username: &str, password: &str) -> anyhow::Result<()> {
    let mut view = LoginView::new(None);
    if view.submit(&state.session, username, password).await.is_some() {
        println!("Welcome back, {username}!");
        return Ok(());
    }
    if !view.field_errors().is_empty() {
        return Err(field_errors(view.field_errors()));
    }
    anyhow::bail!("{}", view.error().unwrap_or("Failed to login. Please try again."))
}

pub async fn register(
    state: &AppState,
    username: &str,
    password: &str,
    confirm: &str,
    role: Role,
) -> anyhow::Result<()> {
    let mut view = RegisterView::new();
    if view
        .submit(&state.session, username, password, confirm, role)
        .await
        .is_some()
    {
        println!("Account created. Logged in as {username} ({}).", role.as_str());
        return Ok(());
    }
    if !view.field_errors().is_empty() {
        return Err(field_errors(view.field_errors()));
    }
    anyhow::bail!(
        "{}",
        view.error().unwrap_or("Registration failed. Please try again.")
    )
}

pub async fn logout(state: &AppState) {
    state.session.logout().await;
    println!("Logged out.");
}

pub fn whoami(state: &AppState) {
    match state.session.current_user() {
        Some(user) => println!(
            "[{}] {} (id {}, {})",
            initials(&user.username),
            user.username,
            user.id,
            user.role.as_str()
        ),
        None => println!("Not logged in."),
    }
}
