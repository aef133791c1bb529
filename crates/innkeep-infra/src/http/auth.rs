use async_trait::async_trait;
use reqwest::Method;

use innkeep_core::ApiError;
use innkeep_core::domain::{Credentials, Role, Session, User};
use innkeep_core::ports::{AuthApi, UserApi};
use innkeep_shared::CreatedResponse;
use innkeep_shared::dto::{LoginRequest, LoginResponse, RegisterRequest};

use super::client::{ApiClient, NO_BODY};

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let request = LoginRequest {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        };
        let response: LoginResponse = self.send(Method::POST, "/login", Some(&request)).await?;
        Ok(Session {
            user: User {
                id: response.user_id,
                username: response.username,
                role: Role::from_wire(&response.tipo),
            },
            token: response.token,
        })
    }

    async fn register(&self, credentials: &Credentials, role: Role) -> Result<i64, ApiError> {
        let request = RegisterRequest {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            tipo: role.as_str().to_string(),
        };
        let created: CreatedResponse<i64> =
            self.send(Method::POST, "/users", Some(&request)).await?;
        Ok(created.id)
    }
}

#[async_trait]
impl UserApi for ApiClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let users: Option<Vec<User>> = self.get("/users").await?;
        Ok(users.unwrap_or_default())
    }

    async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.get(&format!("/users/{id}")).await
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(Method::DELETE, &format!("/users/{id}"), NO_BODY)
            .await
    }
}
