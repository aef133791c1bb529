//! Admin dashboard: hotel and user tables with confirmed deletes.

use std::sync::Arc;

use crate::domain::{Hotel, User};
use crate::ports::{AdminApi, HotelApi, UserApi};
use crate::session::SessionStore;

use super::navigation::{Notification, Route};

/// Most hotels the dashboard lists in one load.
pub const HOTEL_LIST_CAP: u32 = 100;

const LOAD_FALLBACK: &str = "Error loading data";
const DELETE_FALLBACK: &str = "Error deleting item";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub hotels: usize,
    pub users: usize,
    pub admins: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Hotel(String),
    User(i64),
}

pub struct DashboardView {
    hotels_api: Arc<dyn HotelApi>,
    users_api: Arc<dyn UserApi>,
    admin_api: Arc<dyn AdminApi>,
    hotels: Vec<Hotel>,
    users: Vec<User>,
    loading: bool,
    error: Option<String>,
    pending_delete: Option<DeleteTarget>,
    notification: Option<Notification>,
}

impl DashboardView {
    pub fn new(
        hotels_api: Arc<dyn HotelApi>,
        users_api: Arc<dyn UserApi>,
        admin_api: Arc<dyn AdminApi>,
    ) -> Self {
        Self {
            hotels_api,
            users_api,
            admin_api,
            hotels: Vec::new(),
            users: Vec::new(),
            loading: false,
            error: None,
            pending_delete: None,
            notification: None,
        }
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&DeleteTarget> {
        self.pending_delete.as_ref()
    }

    /// Counts over the lists currently held.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            hotels: self.hotels.len(),
            users: self.users.len(),
            admins: self.users.iter().filter(|u| u.is_admin()).count(),
        }
    }

    /// Fetch hotels and users together. Either failing fails the load and
    /// leaves the previous lists as they were.
    pub async fn load(&mut self, session: &SessionStore) -> Option<Route> {
        if !session.is_admin() {
            return Some(Route::login_returning_to(Route::Admin));
        }
        self.loading = true;
        self.error = None;

        let fetched = futures::try_join!(
            self.hotels_api.search("", 0, HOTEL_LIST_CAP),
            self.users_api.list_users(),
        );
        match fetched {
            Ok((hotels, users)) => {
                self.hotels = hotels;
                self.users = users;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dashboard load failed");
                self.error = Some(LOAD_FALLBACK.to_string());
            }
        }
        self.loading = false;
        None
    }

    pub fn request_delete(&mut self, target: DeleteTarget) {
        self.pending_delete = Some(target);
    }

    pub fn dismiss_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the item under confirmation and drop it from the local list on success.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(target) = self.pending_delete.take() else {
            return false;
        };

        let result = match &target {
            DeleteTarget::Hotel(id) => self.admin_api.delete_hotel(id).await,
            DeleteTarget::User(id) => self.users_api.delete_user(*id).await,
        };

        match (result, target) {
            (Ok(()), DeleteTarget::Hotel(id)) => {
                self.hotels.retain(|h| h.id != id);
                self.notification = Some(Notification::success("Hotel deleted successfully"));
                true
            }
            (Ok(()), DeleteTarget::User(id)) => {
                self.users.retain(|u| u.id != id);
                self.notification = Some(Notification::success("User deleted successfully"));
                true
            }
            (Err(e), target) => {
                tracing::warn!(?target, error = %e, "Delete failed");
                self.notification = Some(Notification::error(e.display_message(DELETE_FALLBACK)));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::error::ApiError;
    use crate::test_support::{FakeAuth, FakeBackend, MemoryStore, hotel, http_error};
    use crate::views::navigation::Severity;

    fn user(id: i64, name: &str, role: Role) -> User {
        User {
            id,
            username: name.to_string(),
            role,
        }
    }

    async fn session_as(role: Role) -> SessionStore {
        let session = SessionStore::hydrate(
            Arc::new(MemoryStore::default()),
            Arc::new(FakeAuth::accepting(user(1, "boss", role), "tok")),
        )
        .await;
        session.login("boss", "secret").await.unwrap();
        session
    }

    fn backend() -> Arc<FakeBackend> {
        let api = FakeBackend::with_hotels(vec![
            hotel("h1", "Grand Palace", 300.0, 4.8),
            hotel("h2", "Mountain Lodge", 200.0, 3.2),
        ]);
        *api.users.lock().unwrap() = vec![
            user(1, "boss", Role::Administrator),
            user(2, "ana", Role::Customer),
            user(3, "leo", Role::Customer),
        ];
        Arc::new(api)
    }

    fn view(api: &Arc<FakeBackend>) -> DashboardView {
        DashboardView::new(api.clone(), api.clone(), api.clone())
    }

    #[tokio::test]
    async fn test_customers_are_turned_away() {
        let api = backend();
        let mut view = view(&api);

        let redirect = view.load(&session_as(Role::Customer).await).await;

        assert_eq!(redirect, Some(Route::login_returning_to(Route::Admin)));
        assert!(api.searches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_fetches_capped_list_and_counts_admins() {
        let api = backend();
        let mut view = view(&api);

        assert!(view.load(&session_as(Role::Administrator).await).await.is_none());

        assert_eq!(
            api.searches.lock().unwrap().clone(),
            vec![(String::new(), 0, HOTEL_LIST_CAP)]
        );
        assert_eq!(
            view.stats(),
            DashboardStats {
                hotels: 2,
                users: 3,
                admins: 1
            }
        );
    }

    #[tokio::test]
    async fn test_either_fetch_failing_keeps_previous_lists() {
        let api = backend();
        let mut view = view(&api);
        let session = session_as(Role::Administrator).await;
        view.load(&session).await;

        *api.users_failure.lock().unwrap() = Some(http_error(500, "users down"));
        view.load(&session).await;

        assert_eq!(view.error(), Some(LOAD_FALLBACK));
        assert_eq!(view.hotels().len(), 2);
        assert_eq!(view.users().len(), 3);
    }

    #[tokio::test]
    async fn test_confirmed_deletes_update_local_lists() {
        let api = backend();
        let mut view = view(&api);
        view.load(&session_as(Role::Administrator).await).await;

        view.request_delete(DeleteTarget::Hotel("h2".into()));
        assert!(view.confirm_delete().await);
        view.request_delete(DeleteTarget::User(3));
        assert!(view.confirm_delete().await);

        assert_eq!(api.deleted_hotels.lock().unwrap().clone(), vec!["h2".to_string()]);
        assert_eq!(api.deleted_users.lock().unwrap().clone(), vec![3]);
        assert_eq!(view.stats().hotels, 1);
        assert_eq!(view.stats().users, 2);
        assert_eq!(view.notification().unwrap().message, "User deleted successfully");
    }

    #[tokio::test]
    async fn test_dismissed_delete_never_calls_backend() {
        let api = backend();
        let mut view = view(&api);
        view.load(&session_as(Role::Administrator).await).await;

        view.request_delete(DeleteTarget::Hotel("h1".into()));
        view.dismiss_delete();

        assert!(!view.confirm_delete().await);
        assert!(api.deleted_hotels.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_list_unchanged() {
        let api = backend();
        let mut view = view(&api);
        view.load(&session_as(Role::Administrator).await).await;
        api.fail_with(ApiError::Transport("connection refused".into()));

        view.request_delete(DeleteTarget::Hotel("h1".into()));
        assert!(!view.confirm_delete().await);

        assert_eq!(view.hotels().len(), 2);
        let notice = view.notification().unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, DELETE_FALLBACK);
    }
}
