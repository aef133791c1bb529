//! Session store - the single owner of the persisted token and user record.
//!
//! Views read the current user through [`SessionStore::current_user`] or
//! [`SessionStore::subscribe`]; only `login`, `register` and `logout` write.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use crate::domain::{Credentials, Role, User};
use crate::ports::{AuthApi, KeyValueStore, StorageKey};

const LOGIN_FALLBACK: &str = "Failed to login. Please try again.";
const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

/// A failed login or registration, reduced to the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    auth: Arc<dyn AuthApi>,
    user: watch::Sender<Option<User>>,
}

impl SessionStore {
    /// Restore the session persisted by a previous run.
    ///
    /// Token and user are kept only as a pair: a missing half or a user
    /// record that does not parse purges both, leaving the client logged out.
    pub async fn hydrate(storage: Arc<dyn KeyValueStore>, auth: Arc<dyn AuthApi>) -> Self {
        let token = read_key(storage.as_ref(), StorageKey::Token).await;
        let stored_user = read_key(storage.as_ref(), StorageKey::User).await;

        let user = match (token, stored_user) {
            (None, None) => None,
            (Some(_), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored user record is corrupt; clearing session");
                    clear_keys(storage.as_ref()).await;
                    None
                }
            },
            _ => {
                tracing::warn!("Stored session is incomplete; clearing session");
                clear_keys(storage.as_ref()).await;
                None
            }
        };

        if let Some(user) = &user {
            tracing::debug!(user_id = user.id, "Session restored");
        }

        let (tx, _rx) = watch::channel(user);
        Self {
            storage,
            auth,
            user: tx,
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.borrow().as_ref().is_some_and(User::is_admin)
    }

    /// Receive every change to the current user.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user.subscribe()
    }

    /// Log in and persist the session. On failure the previous session is untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthFailure> {
        let credentials = Credentials::new(username, password);
        let session = self.auth.login(&credentials).await.map_err(|e| {
            tracing::debug!(error = %e, "Login rejected");
            AuthFailure::new(e.display_message(LOGIN_FALLBACK))
        })?;

        let user_json = serde_json::to_string(&session.user)
            .map_err(|_| AuthFailure::new(LOGIN_FALLBACK))?;

        if let Err(e) = self
            .storage
            .set(StorageKey::Token.as_str(), &session.token)
            .await
        {
            tracing::error!(error = %e, "Could not persist token");
            return Err(AuthFailure::new(LOGIN_FALLBACK));
        }
        if let Err(e) = self.storage.set(StorageKey::User.as_str(), &user_json).await {
            tracing::error!(error = %e, "Could not persist user; discarding token");
            clear_keys(self.storage.as_ref()).await;
            self.user.send_replace(None);
            return Err(AuthFailure::new(LOGIN_FALLBACK));
        }

        tracing::info!(user_id = session.user.id, username = %session.user.username, "Logged in");
        self.user.send_replace(Some(session.user.clone()));
        Ok(session.user)
    }

    /// Create an account, then log in with the same credentials.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AuthFailure> {
        let credentials = Credentials::new(username, password);
        let id = self
            .auth
            .register(&credentials, role)
            .await
            .map_err(|e| AuthFailure::new(e.display_message(REGISTER_FALLBACK)))?;

        tracing::info!(user_id = id, role = role.as_str(), "Account created");
        self.login(username, password).await
    }

    /// Clear the persisted session. Safe to call when logged out.
    pub async fn logout(&self) {
        clear_keys(self.storage.as_ref()).await;
        self.user.send_replace(None);
    }
}

async fn read_key(storage: &dyn KeyValueStore, key: StorageKey) -> Option<String> {
    match storage.get(key.as_str()).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = key.as_str(), error = %e, "Could not read stored session");
            None
        }
    }
}

async fn clear_keys(storage: &dyn KeyValueStore) {
    for key in [StorageKey::Token, StorageKey::User] {
        if let Err(e) = storage.remove(key.as_str()).await {
            tracing::error!(key = key.as_str(), error = %e, "Could not clear stored session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::test_support::{FakeAuth, MemoryStore};

    fn admin() -> User {
        User {
            id: 1,
            username: "root".to_string(),
            role: Role::Administrator,
        }
    }

    async fn store_with(storage: &Arc<MemoryStore>, auth: &Arc<FakeAuth>) -> SessionStore {
        SessionStore::hydrate(storage.clone(), auth.clone()).await
    }

    #[tokio::test]
    async fn test_login_persists_token_and_user() {
        let storage = Arc::new(MemoryStore::default());
        let auth = Arc::new(FakeAuth::accepting(admin(), "tok-1"));
        let session = store_with(&storage, &auth).await;

        let user = session.login("root", "secret").await.unwrap();

        assert_eq!(user, admin());
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert_eq!(storage.value("token"), Some("tok-1".to_string()));
        let stored: User = serde_json::from_str(&storage.value("user").unwrap()).unwrap();
        assert_eq!(stored, admin());
    }

    #[tokio::test]
    async fn test_login_failure_keeps_previous_session() {
        let storage = Arc::new(MemoryStore::default());
        storage.seed("token", "old-token");
        storage.seed("user", &serde_json::to_string(&admin()).unwrap());
        let auth = Arc::new(FakeAuth::rejecting(ApiError::Http {
            status: 401,
            message: Some("invalid credentials".to_string()),
        }));
        let session = store_with(&storage, &auth).await;

        let err = session.login("root", "wrong").await.unwrap_err();

        assert_eq!(err.message, "invalid credentials");
        assert_eq!(storage.value("token"), Some("old-token".to_string()));
        assert_eq!(session.current_user(), Some(admin()));
    }

    #[tokio::test]
    async fn test_login_failure_without_backend_message_uses_fallback() {
        let storage = Arc::new(MemoryStore::default());
        let auth = Arc::new(FakeAuth::rejecting(ApiError::Transport("refused".into())));
        let session = store_with(&storage, &auth).await;

        let err = session.login("root", "secret").await.unwrap_err();
        assert_eq!(err.message, LOGIN_FALLBACK);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_token_write_failure_keeps_previous_session() {
        let storage = Arc::new(MemoryStore::default());
        storage.seed("token", "old-token");
        storage.seed("user", &serde_json::to_string(&admin()).unwrap());
        let auth = Arc::new(FakeAuth::accepting(admin(), "new-token"));
        let session = store_with(&storage, &auth).await;
        storage.fail_writes_to("token");

        let err = session.login("root", "secret").await.unwrap_err();

        assert_eq!(err.message, LOGIN_FALLBACK);
        assert_eq!(storage.value("token"), Some("old-token".to_string()));
        assert!(storage.value("user").is_some());
        assert_eq!(session.current_user(), Some(admin()));
    }

    #[tokio::test]
    async fn test_user_write_failure_purges_both_keys() {
        let storage = Arc::new(MemoryStore::default());
        storage.seed("token", "old-token");
        storage.seed("user", &serde_json::to_string(&admin()).unwrap());
        let auth = Arc::new(FakeAuth::accepting(admin(), "new-token"));
        let session = store_with(&storage, &auth).await;
        storage.fail_writes_to("user");

        let err = session.login("root", "secret").await.unwrap_err();

        assert_eq!(err.message, LOGIN_FALLBACK);
        assert_eq!(storage.value("token"), None);
        assert_eq!(storage.value("user"), None);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let storage = Arc::new(MemoryStore::default());
        let auth = Arc::new(FakeAuth::accepting(admin(), "tok"));
        let session = store_with(&storage, &auth).await;

        session.logout().await;
        assert!(!session.is_authenticated());

        session.login("root", "secret").await.unwrap();
        session.logout().await;
        session.logout().await;

        assert_eq!(storage.value("token"), None);
        assert_eq!(storage.value("user"), None);
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn test_register_logs_in_once_with_same_credentials() {
        let storage = Arc::new(MemoryStore::default());
        let customer = User {
            id: 9,
            username: "guest".to_string(),
            role: Role::Customer,
        };
        let auth = Arc::new(FakeAuth::accepting(customer.clone(), "tok"));
        let session = store_with(&storage, &auth).await;

        let user = session.register("guest", "secret", Role::Customer).await.unwrap();

        assert_eq!(user, customer);
        assert_eq!(auth.register_calls(), 1);
        assert_eq!(auth.login_calls(), vec![("guest".to_string(), "secret".to_string())]);
    }

    #[tokio::test]
    async fn test_register_failure_skips_login() {
        let storage = Arc::new(MemoryStore::default());
        let auth = Arc::new(FakeAuth::accepting(admin(), "tok").with_register_error(
            ApiError::Http {
                status: 409,
                message: Some("username taken".to_string()),
            },
        ));
        let session = store_with(&storage, &auth).await;

        let err = session.register("root", "secret", Role::Customer).await.unwrap_err();

        assert_eq!(err.message, "username taken");
        assert!(auth.login_calls().is_empty());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_hydrate_restores_valid_session() {
        let storage = Arc::new(MemoryStore::default());
        storage.seed("token", "tok");
        storage.seed("user", r#"{"id":1,"username":"root","tipo":"administrador"}"#);
        let auth = Arc::new(FakeAuth::accepting(admin(), "tok"));

        let session = store_with(&storage, &auth).await;
        assert_eq!(session.current_user(), Some(admin()));
    }

    #[tokio::test]
    async fn test_hydrate_purges_corrupt_user() {
        let storage = Arc::new(MemoryStore::default());
        storage.seed("token", "tok");
        storage.seed("user", "{not json");
        let auth = Arc::new(FakeAuth::accepting(admin(), "tok"));

        let session = store_with(&storage, &auth).await;

        assert!(!session.is_authenticated());
        assert_eq!(storage.value("token"), None);
        assert_eq!(storage.value("user"), None);
    }

    #[tokio::test]
    async fn test_hydrate_purges_token_without_user() {
        let storage = Arc::new(MemoryStore::default());
        storage.seed("token", "tok");
        let auth = Arc::new(FakeAuth::accepting(admin(), "tok"));

        let session = store_with(&storage, &auth).await;

        assert!(!session.is_authenticated());
        assert_eq!(storage.value("token"), None);
    }

    #[tokio::test]
    async fn test_subscribers_see_login_and_logout() {
        let storage = Arc::new(MemoryStore::default());
        let auth = Arc::new(FakeAuth::accepting(admin(), "tok"));
        let session = store_with(&storage, &auth).await;
        let mut rx = session.subscribe();

        session.login("root", "secret").await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Some(admin()));

        session.logout().await;
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }
}
