//! Account ports: login, registration and admin user management.

use async_trait::async_trait;

use crate::domain::{Credentials, Role, Session, User};
use crate::error::ApiError;

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token and the user it belongs to.
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError>;

    /// Create an account. Returns the new user id.
    async fn register(&self, credentials: &Credentials, role: Role) -> Result<i64, ApiError>;
}

#[async_trait]
pub trait UserApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    async fn get_user(&self, id: i64) -> Result<User, ApiError>;

    async fn delete_user(&self, id: i64) -> Result<(), ApiError>;
}
