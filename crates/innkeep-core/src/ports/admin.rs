//! Administrator ports: hotel mutation and the microservice console.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::HotelDraft;
use crate::error::ApiError;

#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Returns the new hotel id.
    async fn create_hotel(&self, draft: &HotelDraft) -> Result<String, ApiError>;

    async fn update_hotel(&self, id: &str, draft: &HotelDraft) -> Result<(), ApiError>;

    async fn delete_hotel(&self, id: &str) -> Result<(), ApiError>;

    async fn microservices_status(&self) -> Result<ServicesOverview, ApiError>;

    async fn scale_service(&self, service: &str, replicas: u32) -> Result<ScaleOutcome, ApiError>;

    async fn service_logs(&self, service: &str) -> Result<ServiceLogs, ApiError>;

    async fn restart_service(&self, service: &str) -> Result<ServiceAction, ApiError>;
}

#[async_trait]
pub trait HealthApi: Send + Sync {
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesOverview {
    pub services: Vec<ServiceStatus>,
    pub summary: ServicesSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceStatus {
    pub name: String,
    pub instances: Vec<ServiceInstance>,
    pub status: String,
    pub load_balanced: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceInstance {
    pub id: String,
    pub name: String,
    pub status: String,
    pub port: String,
    pub uptime: String,
    pub health: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesSummary {
    pub total_services: u32,
    pub total_instances: u32,
    pub healthy_services: u32,
    pub load_balanced_services: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleOutcome {
    pub message: String,
    pub service: String,
    pub new_replicas: u32,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceLogs {
    pub service: String,
    pub instance: String,
    pub logs: Vec<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceAction {
    pub message: String,
    pub service: String,
    pub instance: String,
    pub timestamp: String,
}

/// Whatever `/health` reports; only `status` is interpreted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}
