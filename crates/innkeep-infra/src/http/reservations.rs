use async_trait::async_trait;
use reqwest::Method;

use innkeep_core::ApiError;
use innkeep_core::domain::{NewReservation, Reservation};
use innkeep_core::ports::ReservationApi;
use innkeep_shared::CreatedResponse;
use innkeep_shared::dto::ReservationCreateRequest;

use super::client::{ApiClient, NO_BODY};
use super::segment;

#[async_trait]
impl ReservationApi for ApiClient {
    async fn create_reservation(&self, reservation: &NewReservation) -> Result<String, ApiError> {
        let request = ReservationCreateRequest {
            hotel_id: reservation.hotel_id.clone(),
            hotel_name: reservation.hotel_name.clone(),
            check_in: reservation.check_in.format("%Y-%m-%d").to_string(),
            check_out: reservation.check_out.format("%Y-%m-%d").to_string(),
        };
        let created: CreatedResponse<String> = self
            .send(Method::POST, "/reservations", Some(&request))
            .await?;
        Ok(created.id)
    }

    async fn cancel_reservation(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(
            Method::DELETE,
            &format!("/reservations/{}", segment(id)),
            NO_BODY,
        )
        .await
    }

    async fn user_reservations(&self, user_id: i64) -> Result<Vec<Reservation>, ApiError> {
        let reservations: Option<Vec<Reservation>> = self
            .get(&format!("/users/{user_id}/reservations"))
            .await?;
        Ok(reservations.unwrap_or_default())
    }

    async fn user_hotel_reservations(
        &self,
        user_id: i64,
        hotel_id: &str,
    ) -> Result<Vec<Reservation>, ApiError> {
        let reservations: Option<Vec<Reservation>> = self
            .get(&format!(
                "/users/{user_id}/hotels/{}/reservations",
                segment(hotel_id)
            ))
            .await?;
        Ok(reservations.unwrap_or_default())
    }
}
