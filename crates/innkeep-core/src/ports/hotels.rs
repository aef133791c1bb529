use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Availability, Hotel, Reservation};
use crate::error::ApiError;

/// Public hotel catalogue.
#[async_trait]
pub trait HotelApi: Send + Sync {
    /// Free-text search; an empty query lists everything.
    async fn search(&self, query: &str, offset: u32, limit: u32) -> Result<Vec<Hotel>, ApiError>;

    async fn get_hotel(&self, id: &str) -> Result<Hotel, ApiError>;

    async fn hotel_reservations(&self, id: &str) -> Result<Vec<Reservation>, ApiError>;

    async fn check_availability(
        &self,
        hotel_ids: &[String],
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Availability, ApiError>;
}
