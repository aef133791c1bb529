//! Hotel detail page and its booking dialog.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Hotel, NewReservation, nights_between, total_price};
use crate::ports::{HotelApi, ReservationApi};
use crate::session::SessionStore;

use super::navigation::{Notification, Route};

const LOAD_FALLBACK: &str = "Could not load hotel information.";
const BOOKING_FALLBACK: &str = "Error creating reservation";

#[derive(Debug, Clone, PartialEq)]
pub enum HotelState {
    Loading,
    Loaded(Hotel),
    /// Missing or failed to load; the page offers a way back to search.
    NotFound { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingPhase {
    Closed,
    Editing,
    Submitting,
    /// The last submission failed; the dialog stays open for a retry.
    Failed { message: String },
}

/// Booking dialog state. Only the two dates are stored; nights and total
/// are recomputed from them on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDialog {
    phase: BookingPhase,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
}

impl Default for BookingDialog {
    fn default() -> Self {
        Self {
            phase: BookingPhase::Closed,
            check_in: None,
            check_out: None,
        }
    }
}

impl BookingDialog {
    pub fn phase(&self) -> &BookingPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != BookingPhase::Closed
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    pub fn nights(&self) -> Option<i64> {
        Some(nights_between(self.check_in?, self.check_out?))
    }

    pub fn total_price(&self, price_per_night: f64) -> Option<f64> {
        Some(total_price(price_per_night, self.check_in?, self.check_out?))
    }

    /// Both dates present and check-out strictly after check-in.
    fn validate(&self) -> Result<(NaiveDate, NaiveDate), String> {
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return Err("Please select check-in and check-out dates".to_string());
        };
        if check_in >= check_out {
            return Err("Check-out date must be after check-in date".to_string());
        }
        Ok((check_in, check_out))
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

pub struct HotelDetailView {
    hotels: Arc<dyn HotelApi>,
    reservations: Arc<dyn ReservationApi>,
    hotel_id: String,
    state: HotelState,
    booking: BookingDialog,
    notification: Option<Notification>,
}

impl HotelDetailView {
    pub fn new(
        hotels: Arc<dyn HotelApi>,
        reservations: Arc<dyn ReservationApi>,
        hotel_id: impl Into<String>,
    ) -> Self {
        Self {
            hotels,
            reservations,
            hotel_id: hotel_id.into(),
            state: HotelState::Loading,
            booking: BookingDialog::default(),
            notification: None,
        }
    }

    pub fn state(&self) -> &HotelState {
        &self.state
    }

    pub fn hotel(&self) -> Option<&Hotel> {
        match &self.state {
            HotelState::Loaded(hotel) => Some(hotel),
            _ => None,
        }
    }

    pub fn booking(&self) -> &BookingDialog {
        &self.booking
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    pub async fn load(&mut self) {
        self.state = HotelState::Loading;
        self.state = match self.hotels.get_hotel(&self.hotel_id).await {
            Ok(hotel) => HotelState::Loaded(hotel),
            Err(e) => {
                tracing::warn!(hotel_id = %self.hotel_id, error = %e, "Could not load hotel");
                HotelState::NotFound {
                    message: LOAD_FALLBACK.to_string(),
                }
            }
        };
    }

    /// Open the dialog, or send an anonymous visitor to login and back here.
    pub fn open_booking(&mut self, session: &SessionStore) -> Option<Route> {
        if !session.is_authenticated() {
            return Some(Route::login_returning_to(Route::Hotel {
                id: self.hotel_id.clone(),
            }));
        }
        self.booking.phase = BookingPhase::Editing;
        None
    }

    pub fn select_dates(&mut self, check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) {
        if !self.booking.is_open() || self.booking.phase == BookingPhase::Submitting {
            return;
        }
        self.booking.check_in = check_in;
        self.booking.check_out = check_out;
        self.booking.phase = BookingPhase::Editing;
    }

    pub fn close_booking(&mut self) {
        self.booking.reset();
    }

    /// Validate locally, then create the reservation.
    ///
    /// Success closes and resets the dialog. Failure keeps it open with the
    /// backend's message so the user can correct and retry.
    pub async fn submit_booking(&mut self) -> bool {
        let Some((hotel_id, hotel_name)) = self.hotel().map(|h| (h.id.clone(), h.name.clone()))
        else {
            return false;
        };
        if !self.booking.is_open() {
            return false;
        }
        let (check_in, check_out) = match self.booking.validate() {
            Ok(dates) => dates,
            Err(message) => {
                self.notification = Some(Notification::warning(message));
                return false;
            }
        };

        let request = NewReservation {
            hotel_id,
            hotel_name,
            check_in,
            check_out,
        };

        self.booking.phase = BookingPhase::Submitting;
        match self.reservations.create_reservation(&request).await {
            Ok(id) => {
                tracing::info!(reservation_id = %id, hotel_id = %request.hotel_id, "Reservation created");
                self.notification = Some(Notification::success("Reservation created successfully!"));
                self.booking.reset();
                true
            }
            Err(e) => {
                let message = e.display_message(BOOKING_FALLBACK);
                self.notification = Some(Notification::error(message.clone()));
                self.booking.phase = BookingPhase::Failed { message };
                false
            }
        }
    }
}
