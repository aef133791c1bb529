//! In-memory stand-ins for the ports, shared by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{
    Availability, Credentials, Hotel, HotelDraft, NewReservation, Reservation, Role, Session, User,
};
use crate::error::ApiError;
use crate::ports::{
    AdminApi, AuthApi, HotelApi, KeyValueStore, ReservationApi, ScaleOutcome, ServiceAction,
    ServiceLogs, ServicesOverview, StorageError, UserApi,
};

#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    failing_writes: Mutex<Vec<String>>,
}

impl MemoryStore {
    /// Make every later `set` of `key` fail.
    pub fn fail_writes_to(&self, key: &str) {
        self.failing_writes.lock().unwrap().push(key.to_string());
    }

    pub fn seed(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing_writes.lock().unwrap().iter().any(|k| k == key) {
            return Err(StorageError::Io(format!("disk full writing {key}")));
        }
        self.seed(key, value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Copy an `ApiError` so scripted failures can be replayed.
pub fn replay(err: &ApiError) -> ApiError {
    match err {
        ApiError::Transport(m) => ApiError::Transport(m.clone()),
        ApiError::Http { status, message } => ApiError::Http {
            status: *status,
            message: message.clone(),
        },
        ApiError::Decode(m) => ApiError::Decode(m.clone()),
    }
}

pub fn http_error(status: u16, message: &str) -> ApiError {
    ApiError::Http {
        status,
        message: Some(message.to_string()),
    }
}

pub struct FakeAuth {
    user: User,
    token: String,
    login_error: Option<ApiError>,
    register_error: Option<ApiError>,
    logins: Mutex<Vec<(String, String)>>,
    registrations: Mutex<u32>,
}

impl FakeAuth {
    pub fn accepting(user: User, token: &str) -> Self {
        Self {
            user,
            token: token.to_string(),
            login_error: None,
            register_error: None,
            logins: Mutex::new(Vec::new()),
            registrations: Mutex::new(0),
        }
    }

    pub fn rejecting(err: ApiError) -> Self {
        let mut fake = Self::accepting(
            User {
                id: 0,
                username: String::new(),
                role: Role::Customer,
            },
            "",
        );
        fake.login_error = Some(err);
        fake
    }

    pub fn with_register_error(mut self, err: ApiError) -> Self {
        self.register_error = Some(err);
        self
    }

    pub fn login_calls(&self) -> Vec<(String, String)> {
        self.logins.lock().unwrap().clone()
    }

    pub fn register_calls(&self) -> u32 {
        *self.registrations.lock().unwrap()
    }
}

#[async_trait]
impl AuthApi for FakeAuth {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        self.logins
            .lock()
            .unwrap()
            .push((credentials.username.clone(), credentials.password.clone()));
        if let Some(err) = &self.login_error {
            return Err(replay(err));
        }
        Ok(Session {
            token: self.token.clone(),
            user: self.user.clone(),
        })
    }

    async fn register(&self, _credentials: &Credentials, _role: Role) -> Result<i64, ApiError> {
        *self.registrations.lock().unwrap() += 1;
        if let Some(err) = &self.register_error {
            return Err(replay(err));
        }
        Ok(self.user.id)
    }
}

/// Scripted backend covering the catalogue, reservation, user and admin ports.
#[derive(Default)]
pub struct FakeBackend {
    pub hotels: Mutex<Vec<Hotel>>,
    pub users: Mutex<Vec<User>>,
    pub reservations: Mutex<Vec<Reservation>>,
    pub failure: Mutex<Option<ApiError>>,
    pub users_failure: Mutex<Option<ApiError>>,
    pub searches: Mutex<Vec<(String, u32, u32)>>,
    pub created: Mutex<Vec<NewReservation>>,
    pub cancelled: Mutex<Vec<String>>,
    pub deleted_hotels: Mutex<Vec<String>>,
    pub deleted_users: Mutex<Vec<i64>>,
    pub saved_drafts: Mutex<Vec<(Option<String>, HotelDraft)>>,
}

impl FakeBackend {
    pub fn with_hotels(hotels: Vec<Hotel>) -> Self {
        let backend = Self::default();
        *backend.hotels.lock().unwrap() = hotels;
        backend
    }

    pub fn fail_with(&self, err: ApiError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    fn check(&self) -> Result<(), ApiError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(err) => Err(replay(err)),
            None => Ok(()),
        }
    }

    pub fn network_calls(&self) -> usize {
        self.searches.lock().unwrap().len()
            + self.created.lock().unwrap().len()
            + self.cancelled.lock().unwrap().len()
            + self.deleted_hotels.lock().unwrap().len()
            + self.deleted_users.lock().unwrap().len()
            + self.saved_drafts.lock().unwrap().len()
    }
}

#[async_trait]
impl HotelApi for FakeBackend {
    async fn search(&self, query: &str, offset: u32, limit: u32) -> Result<Vec<Hotel>, ApiError> {
        self.searches
            .lock()
            .unwrap()
            .push((query.to_string(), offset, limit));
        self.check()?;
        let needle = query.to_lowercase();
        Ok(self
            .hotels
            .lock()
            .unwrap()
            .iter()
            .filter(|h| needle.is_empty() || h.name.to_lowercase().contains(&needle))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get_hotel(&self, id: &str) -> Result<Hotel, ApiError> {
        self.check()?;
        self.hotels
            .lock()
            .unwrap()
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| http_error(404, "hotel not found"))
    }

    async fn hotel_reservations(&self, id: &str) -> Result<Vec<Reservation>, ApiError> {
        self.check()?;
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.hotel_id == id)
            .cloned()
            .collect())
    }

    async fn check_availability(
        &self,
        hotel_ids: &[String],
        _check_in: NaiveDate,
        _check_out: NaiveDate,
    ) -> Result<Availability, ApiError> {
        self.check()?;
        let hotels = self.hotels.lock().unwrap();
        Ok(hotel_ids
            .iter()
            .map(|id| {
                let open = hotels
                    .iter()
                    .any(|h| &h.id == id && h.available_rooms > 0);
                (id.clone(), open)
            })
            .collect())
    }
}

#[async_trait]
impl ReservationApi for FakeBackend {
    async fn create_reservation(&self, reservation: &NewReservation) -> Result<String, ApiError> {
        self.created.lock().unwrap().push(reservation.clone());
        self.check()?;
        Ok(format!("res-{}", self.created.lock().unwrap().len()))
    }

    async fn cancel_reservation(&self, id: &str) -> Result<(), ApiError> {
        self.cancelled.lock().unwrap().push(id.to_string());
        self.check()
    }

    async fn user_reservations(&self, user_id: i64) -> Result<Vec<Reservation>, ApiError> {
        self.check()?;
        let user_id = user_id.to_string();
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn user_hotel_reservations(
        &self,
        user_id: i64,
        hotel_id: &str,
    ) -> Result<Vec<Reservation>, ApiError> {
        let mine = self.user_reservations(user_id).await?;
        Ok(mine.into_iter().filter(|r| r.hotel_id == hotel_id).collect())
    }
}

#[async_trait]
impl UserApi for FakeBackend {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        if let Some(err) = self.users_failure.lock().unwrap().as_ref() {
            return Err(replay(err));
        }
        self.check()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.check()?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| http_error(404, "user not found"))
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.deleted_users.lock().unwrap().push(id);
        self.check()
    }
}

#[async_trait]
impl AdminApi for FakeBackend {
    async fn create_hotel(&self, draft: &HotelDraft) -> Result<String, ApiError> {
        self.saved_drafts.lock().unwrap().push((None, draft.clone()));
        self.check()?;
        Ok("new-hotel".to_string())
    }

    async fn update_hotel(&self, id: &str, draft: &HotelDraft) -> Result<(), ApiError> {
        self.saved_drafts
            .lock()
            .unwrap()
            .push((Some(id.to_string()), draft.clone()));
        self.check()
    }

    async fn delete_hotel(&self, id: &str) -> Result<(), ApiError> {
        self.deleted_hotels.lock().unwrap().push(id.to_string());
        self.check()
    }

    async fn microservices_status(&self) -> Result<ServicesOverview, ApiError> {
        self.check()?;
        Ok(ServicesOverview::default())
    }

    async fn scale_service(&self, service: &str, replicas: u32) -> Result<ScaleOutcome, ApiError> {
        self.check()?;
        Ok(ScaleOutcome {
            service: service.to_string(),
            new_replicas: replicas,
            ..ScaleOutcome::default()
        })
    }

    async fn service_logs(&self, service: &str) -> Result<ServiceLogs, ApiError> {
        self.check()?;
        Ok(ServiceLogs {
            service: service.to_string(),
            ..ServiceLogs::default()
        })
    }

    async fn restart_service(&self, service: &str) -> Result<ServiceAction, ApiError> {
        self.check()?;
        Ok(ServiceAction {
            service: service.to_string(),
            ..ServiceAction::default()
        })
    }
}

pub fn hotel(id: &str, name: &str, price: f64, rating: f64) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        price_per_night: price,
        rating,
        available_rooms: 10,
        ..Hotel::default()
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}
