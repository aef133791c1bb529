//! Admin create/edit hotel form.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{DEFAULT_CHECK_IN_TIME, DEFAULT_CHECK_OUT_TIME, Hotel, HotelDraft};
use crate::ports::{AdminApi, HotelApi};
use crate::session::SessionStore;
use crate::validation::{
    Check, combine, validate_email, validate_phone, validate_price, validate_rating,
    validate_required, validate_url,
};

use super::navigation::{Notification, Redirect, Route};

/// How long the success notification stays up before returning to the dashboard.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

const LOAD_FALLBACK: &str = "Could not load hotel information";
const SAVE_FALLBACK: &str = "Error saving hotel";

/// Raw form input. Numbers stay text until submission.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelForm {
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub price_per_night: String,
    pub rating: String,
    pub available_rooms: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

impl Default for HotelForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            country: String::new(),
            phone: String::new(),
            email: String::new(),
            price_per_night: String::new(),
            rating: String::new(),
            available_rooms: String::new(),
            check_in_time: DEFAULT_CHECK_IN_TIME.to_string(),
            check_out_time: DEFAULT_CHECK_OUT_TIME.to_string(),
            amenities: Vec::new(),
            images: Vec::new(),
        }
    }
}

impl From<&Hotel> for HotelForm {
    fn from(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            description: hotel.description.clone(),
            address: hotel.address.clone(),
            city: hotel.city.clone(),
            state: hotel.state.clone(),
            country: hotel.country.clone(),
            phone: hotel.phone.clone(),
            email: hotel.email.clone(),
            price_per_night: hotel.price_per_night.to_string(),
            rating: hotel.rating.to_string(),
            available_rooms: hotel.available_rooms.to_string(),
            check_in_time: hotel.check_in_clock(),
            check_out_time: hotel.check_out_clock(),
            amenities: hotel.amenities.clone(),
            images: hotel.images.clone(),
        }
    }
}

impl HotelForm {
    /// Every rule that fails, in field order.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let optional_rating = if self.rating.trim().is_empty() {
            Ok(())
        } else {
            validate_rating(&self.rating)
        };
        combine([
            validate_required(&self.name, "Name"),
            validate_required(&self.address, "Address"),
            validate_required(&self.city, "City"),
            validate_required(&self.country, "Country"),
            validate_required(&self.price_per_night, "Price")
                .and_then(|()| validate_price(&self.price_per_night)),
            optional_rating,
            validate_required(&self.available_rooms, "Available rooms")
                .and_then(|()| validate_rooms(&self.available_rooms)),
            validate_email(&self.email),
            validate_phone(&self.phone),
        ])
    }

    /// Map the form onto the backend payload. Unparseable numbers become zero.
    pub fn to_draft(&self) -> HotelDraft {
        HotelDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            price_per_night: coerce_number(&self.price_per_night),
            rating: coerce_number(&self.rating),
            available_rooms: coerce_count(&self.available_rooms),
            check_in_time: self.check_in_time.clone(),
            check_out_time: self.check_out_time.clone(),
            amenities: self.amenities.clone(),
            images: self.images.clone(),
        }
    }
}

fn validate_rooms(raw: &str) -> Check {
    match raw.trim().parse::<f64>() {
        Ok(rooms) if rooms < 0.0 => Err("Available rooms cannot be negative".to_string()),
        Ok(_) => Ok(()),
        Err(_) => Err("Available rooms must be a number".to_string()),
    }
}

fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Whole numbers parse directly; decimals are truncated.
fn coerce_count(raw: &str) -> u32 {
    let raw = raw.trim();
    raw.parse::<u32>().unwrap_or_else(|_| {
        let n = coerce_number(raw);
        if n > 0.0 { n.trunc() as u32 } else { 0 }
    })
}

/// Add `value` trimmed, unless blank or already listed.
fn push_tag(tags: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || tags.iter().any(|t| t == value) {
        return false;
    }
    tags.push(value.to_string());
    true
}

pub struct HotelFormView {
    hotels: Arc<dyn HotelApi>,
    admin: Arc<dyn AdminApi>,
    hotel_id: Option<String>,
    form: HotelForm,
    loading: bool,
    saving: bool,
    field_errors: Vec<String>,
    error: Option<String>,
    notification: Option<Notification>,
}

impl HotelFormView {
    /// `hotel_id` selects edit mode; `None` creates a new hotel.
    pub fn new(
        hotels: Arc<dyn HotelApi>,
        admin: Arc<dyn AdminApi>,
        hotel_id: Option<String>,
    ) -> Self {
        Self {
            hotels,
            admin,
            hotel_id,
            form: HotelForm::default(),
            loading: false,
            saving: false,
            field_errors: Vec::new(),
            error: None,
            notification: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.hotel_id.is_some()
    }

    pub fn form(&self) -> &HotelForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut HotelForm {
        &mut self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn field_errors(&self) -> &[String] {
        &self.field_errors
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Admin-only. In edit mode, prefill the form from the stored hotel.
    pub async fn load(&mut self, session: &SessionStore) -> Option<Route> {
        if !session.is_admin() {
            return Some(Route::Login { return_to: None });
        }
        // Create mode has nothing to prefill.
        let id = self.hotel_id.clone()?;

        self.loading = true;
        match self.hotels.get_hotel(&id).await {
            Ok(hotel) => self.form = HotelForm::from(&hotel),
            Err(e) => {
                tracing::warn!(hotel_id = %id, error = %e, "Could not load hotel for editing");
                self.error = Some(LOAD_FALLBACK.to_string());
            }
        }
        self.loading = false;
        None
    }

    pub fn add_amenity(&mut self, amenity: &str) -> bool {
        push_tag(&mut self.form.amenities, amenity)
    }

    pub fn remove_amenity(&mut self, amenity: &str) {
        self.form.amenities.retain(|a| a != amenity);
    }

    /// Refuses blanks, duplicates and anything that does not parse as a URL.
    pub fn add_image(&mut self, url: &str) -> bool {
        if validate_url(url).is_err() {
            return false;
        }
        push_tag(&mut self.form.images, url)
    }

    pub fn remove_image(&mut self, url: &str) {
        self.form.images.retain(|i| i != url);
    }

    /// Validate, then create or update. Success hands back a delayed
    /// redirect to the dashboard.
    pub async fn submit(&mut self) -> Option<Redirect> {
        self.error = None;
        self.field_errors = self.form.validate().err().unwrap_or_default();
        if !self.field_errors.is_empty() {
            return None;
        }

        let draft = self.form.to_draft();
        self.saving = true;
        let result = match &self.hotel_id {
            Some(id) => self.admin.update_hotel(id, &draft).await.map(|()| id.clone()),
            None => self.admin.create_hotel(&draft).await,
        };
        self.saving = false;

        match result {
            Ok(id) => {
                let message = if self.is_editing() {
                    "Hotel updated successfully"
                } else {
                    "Hotel created successfully"
                };
                tracing::info!(hotel_id = %id, "{message}");
                self.notification = Some(Notification::success(message));
                Some(Redirect {
                    route: Route::Admin,
                    after: REDIRECT_DELAY,
                })
            }
            Err(e) => {
                self.error = Some(e.display_message(SAVE_FALLBACK));
                None
            }
        }
    }
}
