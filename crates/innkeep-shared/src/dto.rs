//! Data Transfer Objects - request/response bodies for the backend API.

use serde::{Deserialize, Serialize};

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: i64,
    pub username: String,
    pub token: String,
    /// Role string, `cliente` or `administrador`.
    pub tipo: String,
}

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub tipo: String,
}

/// Request to book a stay. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreateRequest {
    pub hotel_id: String,
    pub hotel_name: String,
    pub check_in: String,
    pub check_out: String,
}

/// Request to check several hotels for the same date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    pub hotel_ids: Vec<String>,
    pub check_in: String,
    pub check_out: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleRequest {
    pub service_name: String,
    pub replicas: u32,
}
