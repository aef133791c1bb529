use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Method;

use innkeep_core::ApiError;
use innkeep_core::domain::{Availability, Hotel, Reservation};
use innkeep_core::ports::HotelApi;
use innkeep_shared::dto::AvailabilityRequest;

use super::client::ApiClient;
use super::segment;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[async_trait]
impl HotelApi for ApiClient {
    async fn search(&self, query: &str, offset: u32, limit: u32) -> Result<Vec<Hotel>, ApiError> {
        let mut params = Vec::with_capacity(3);
        if !query.is_empty() {
            params.push(("q", query.to_string()));
        }
        params.push(("offset", offset.to_string()));
        params.push(("limit", limit.to_string()));

        let hotels: Option<Vec<Hotel>> = self.get_with_query("/search", &params).await?;
        Ok(hotels.unwrap_or_default())
    }

    async fn get_hotel(&self, id: &str) -> Result<Hotel, ApiError> {
        self.get(&format!("/hotels/{}", segment(id))).await
    }

    async fn hotel_reservations(&self, id: &str) -> Result<Vec<Reservation>, ApiError> {
        let reservations: Option<Vec<Reservation>> = self
            .get(&format!("/hotels/{}/reservations", segment(id)))
            .await?;
        Ok(reservations.unwrap_or_default())
    }

    async fn check_availability(
        &self,
        hotel_ids: &[String],
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Availability, ApiError> {
        let request = AvailabilityRequest {
            hotel_ids: hotel_ids.to_vec(),
            check_in: check_in.format(DATE_FORMAT).to_string(),
            check_out: check_out.format(DATE_FORMAT).to_string(),
        };
        self.send(Method::POST, "/hotels/availability", Some(&request))
            .await
    }
}
