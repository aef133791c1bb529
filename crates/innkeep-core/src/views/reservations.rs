//! "My reservations": the signed-in user's bookings with cancellation.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Reservation, ReservationStatus};
use crate::ports::ReservationApi;
use crate::session::SessionStore;

use super::navigation::{Notification, Route};

const LOAD_FALLBACK: &str = "Could not load reservations";
const CANCEL_FALLBACK: &str = "Error cancelling reservation";

/// A reservation with the values derived for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRow {
    pub reservation: Reservation,
    pub status: ReservationStatus,
    pub nights: i64,
}

pub struct ReservationsView {
    api: Arc<dyn ReservationApi>,
    reservations: Vec<Reservation>,
    loading: bool,
    error: Option<String>,
    pending_cancel: Option<Reservation>,
    notification: Option<Notification>,
}

impl ReservationsView {
    pub fn new(api: Arc<dyn ReservationApi>) -> Self {
        Self {
            api,
            reservations: Vec::new(),
            loading: false,
            error: None,
            pending_cancel: None,
            notification: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn pending_cancel(&self) -> Option<&Reservation> {
        self.pending_cancel.as_ref()
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn rows(&self, today: NaiveDate) -> Vec<ReservationRow> {
        self.reservations
            .iter()
            .map(|r| ReservationRow {
                status: r.status(today),
                nights: r.nights(),
                reservation: r.clone(),
            })
            .collect()
    }

    /// Load the current user's reservations, or ask for a login first.
    pub async fn load(&mut self, session: &SessionStore) -> Option<Route> {
        let Some(user) = session.current_user() else {
            return Some(Route::login_returning_to(Route::Reservations));
        };
        self.loading = true;
        self.error = None;

        match self.api.user_reservations(user.id).await {
            Ok(reservations) => self.reservations = reservations,
            Err(e) => {
                tracing::warn!(user_id = user.id, error = %e, "Could not load reservations");
                self.error = Some(LOAD_FALLBACK.to_string());
            }
        }
        self.loading = false;
        None
    }

    /// Open the confirmation dialog. Refused for stays that can no longer be cancelled.
    pub fn request_cancel(&mut self, reservation_id: &str, today: NaiveDate) -> bool {
        let Some(reservation) = self
            .reservations
            .iter()
            .find(|r| r.id == reservation_id)
        else {
            return false;
        };
        if !reservation.status(today).can_cancel() {
            return false;
        }
        self.pending_cancel = Some(reservation.clone());
        true
    }

    pub fn dismiss_cancel(&mut self) {
        self.pending_cancel = None;
    }

    /// Cancel the reservation under confirmation. The row is removed only
    /// once the backend agrees; the dialog closes either way.
    pub async fn confirm_cancel(&mut self) -> bool {
        let Some(reservation) = self.pending_cancel.take() else {
            return false;
        };

        match self.api.cancel_reservation(&reservation.id).await {
            Ok(()) => {
                self.reservations.retain(|r| r.id != reservation.id);
                self.notification = Some(Notification::success(
                    "Reservation cancelled successfully",
                ));
                true
            }
            Err(e) => {
                self.notification = Some(Notification::error(e.display_message(CANCEL_FALLBACK)));
                false
            }
        }
    }
}
