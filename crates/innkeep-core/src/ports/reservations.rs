use async_trait::async_trait;

use crate::domain::{NewReservation, Reservation};
use crate::error::ApiError;

/// Reservation lifecycle. Every call requires an authenticated session.
#[async_trait]
pub trait ReservationApi: Send + Sync {
    /// Book a stay. Returns the reservation id.
    async fn create_reservation(&self, reservation: &NewReservation) -> Result<String, ApiError>;

    async fn cancel_reservation(&self, id: &str) -> Result<(), ApiError>;

    async fn user_reservations(&self, user_id: i64) -> Result<Vec<Reservation>, ApiError>;

    async fn user_hotel_reservations(
        &self,
        user_id: i64,
        hotel_id: &str,
    ) -> Result<Vec<Reservation>, ApiError>;
}
