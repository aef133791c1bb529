//! Ports - trait definitions for external collaborators.
//! The backend REST API and the persistent client storage sit behind these.

mod admin;
mod auth;
mod hotels;
mod reservations;
mod storage;

pub use admin::{
    AdminApi, HealthApi, HealthStatus, ScaleOutcome, ServiceAction, ServiceInstance, ServiceLogs,
    ServiceStatus, ServicesOverview, ServicesSummary,
};
pub use auth::{AuthApi, UserApi};
pub use hotels::HotelApi;
pub use reservations::ReservationApi;
pub use storage::{KeyValueStore, StorageError, StorageKey};
