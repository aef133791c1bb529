use async_trait::async_trait;
use reqwest::Method;

use innkeep_core::ApiError;
use innkeep_core::domain::HotelDraft;
use innkeep_core::ports::{
    AdminApi, HealthApi, HealthStatus, ScaleOutcome, ServiceAction, ServiceLogs, ServicesOverview,
};
use innkeep_shared::CreatedResponse;
use innkeep_shared::dto::ScaleRequest;

use super::client::{ApiClient, NO_BODY};
use super::segment;

#[async_trait]
impl AdminApi for ApiClient {
    async fn create_hotel(&self, draft: &HotelDraft) -> Result<String, ApiError> {
        let created: CreatedResponse<String> =
            self.send(Method::POST, "/admin/hotels", Some(draft)).await?;
        Ok(created.id)
    }

    async fn update_hotel(&self, id: &str, draft: &HotelDraft) -> Result<(), ApiError> {
        self.send_unit(
            Method::PUT,
            &format!("/admin/hotels/{}", segment(id)),
            Some(draft),
        )
        .await
    }

    async fn delete_hotel(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(
            Method::DELETE,
            &format!("/admin/hotels/{}", segment(id)),
            NO_BODY,
        )
        .await
    }

    async fn microservices_status(&self) -> Result<ServicesOverview, ApiError> {
        self.get("/admin/microservices").await
    }

    async fn scale_service(&self, service: &str, replicas: u32) -> Result<ScaleOutcome, ApiError> {
        let request = ScaleRequest {
            service_name: service.to_string(),
            replicas,
        };
        self.send(Method::POST, "/admin/microservices/scale", Some(&request))
            .await
    }

    async fn service_logs(&self, service: &str) -> Result<ServiceLogs, ApiError> {
        self.get(&format!("/admin/microservices/{}/logs", segment(service)))
            .await
    }

    async fn restart_service(&self, service: &str) -> Result<ServiceAction, ApiError> {
        self.send(
            Method::POST,
            &format!("/admin/microservices/{}/restart", segment(service)),
            NO_BODY,
        )
        .await
    }
}

#[async_trait]
impl HealthApi for ApiClient {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get("/health").await
    }
}
