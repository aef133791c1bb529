//! Per-view state machines. Each view owns its loading flag, error, dialogs
//! and notifications; nothing outside the view reads them.

mod auth;
mod dashboard;
mod hotel_detail;
mod hotel_form;
mod navigation;
mod reservations;
mod search;

pub use auth::{LoginView, RegisterView};
pub use dashboard::{DashboardStats, DashboardView, DeleteTarget, HOTEL_LIST_CAP};
pub use hotel_detail::{BookingDialog, BookingPhase, HotelDetailView, HotelState};
pub use hotel_form::{HotelForm, HotelFormView, REDIRECT_DELAY};
pub use navigation::{Notification, Redirect, Route, Severity};
pub use reservations::{ReservationRow, ReservationsView};
pub use search::SearchView;
