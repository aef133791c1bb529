//! Login and registration forms.

use crate::domain::Role;
use crate::session::SessionStore;
use crate::validation::{
    MIN_LOGIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH, combine, validate_min_length,
    validate_password, validate_required, validate_username,
};

use super::navigation::Route;

pub struct LoginView {
    return_to: Route,
    field_errors: Vec<String>,
    error: Option<String>,
}

impl LoginView {
    /// `return_to` is where a successful login lands; `Home` when the user
    /// came straight to the form.
    pub fn new(return_to: Option<Route>) -> Self {
        Self {
            return_to: return_to.unwrap_or(Route::Home),
            field_errors: Vec::new(),
            error: None,
        }
    }

    pub fn field_errors(&self) -> &[String] {
        &self.field_errors
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub async fn submit(
        &mut self,
        session: &SessionStore,
        username: &str,
        password: &str,
    ) -> Option<Route> {
        self.error = None;
        self.field_errors = combine([
            validate_required(username, "Username")
                .and_then(|()| validate_min_length(username, "Username", MIN_USERNAME_LENGTH)),
            validate_required(password, "Password").and_then(|()| {
                validate_min_length(password, "Password", MIN_LOGIN_PASSWORD_LENGTH)
            }),
        ])
        .err()
        .unwrap_or_default();
        if !self.field_errors.is_empty() {
            return None;
        }

        match session.login(username, password).await {
            Ok(_) => Some(self.return_to.clone()),
            Err(failure) => {
                self.error = Some(failure.message);
                None
            }
        }
    }
}

#[derive(Default)]
pub struct RegisterView {
    field_errors: Vec<String>,
    error: Option<String>,
}

impl RegisterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_errors(&self) -> &[String] {
        &self.field_errors
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(
        &mut self,
        session: &SessionStore,
        username: &str,
        password: &str,
        confirm_password: &str,
        role: Role,
    ) -> Option<Route> {
        self.error = None;
        let confirm = if confirm_password.is_empty() {
            Err("Please confirm your password".to_string())
        } else if confirm_password != password {
            Err("Passwords do not match".to_string())
        } else {
            Ok(())
        };
        self.field_errors = combine([
            validate_username(username),
            validate_password(password),
            confirm,
        ])
        .err()
        .unwrap_or_default();
        if !self.field_errors.is_empty() {
            return None;
        }

        match session.register(username, password, role).await {
            Ok(_) => Some(Route::Home),
            Err(failure) => {
                self.error = Some(failure.message);
                None
            }
        }
    }
}
