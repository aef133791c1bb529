use std::fmt;
use std::time::Duration;

/// Where a view wants the client to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search { query: String },
    Login { return_to: Option<Box<Route>> },
    Register,
    Hotel { id: String },
    Reservations,
    Admin,
    NewHotel,
    EditHotel { id: String },
}

impl Route {
    pub fn login_returning_to(route: Route) -> Self {
        Route::Login {
            return_to: Some(Box::new(route)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Search { query } if query.is_empty() => write!(f, "/search"),
            Route::Search { query } => write!(f, "/search?q={query}"),
            Route::Login { .. } => write!(f, "/login"),
            Route::Register => write!(f, "/register"),
            Route::Hotel { id } => write!(f, "/hotels/{id}"),
            Route::Reservations => write!(f, "/reservations"),
            Route::Admin => write!(f, "/admin"),
            Route::NewHotel => write!(f, "/admin/hotels/new"),
            Route::EditHotel { id } => write!(f, "/admin/hotels/{id}/edit"),
        }
    }
}

/// Navigation that should happen only after `after` has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub route: Route,
    pub after: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A toast-style message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}
