use std::collections::HashMap;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHECK_IN_TIME: &str = "15:00";
pub const DEFAULT_CHECK_OUT_TIME: &str = "11:00";

/// Hotel entity, in the backend's snake_case schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub price_per_night: f64,
    pub rating: f64,
    /// The backend spells this field `avaiable_rooms`.
    #[serde(rename = "avaiable_rooms")]
    pub available_rooms: u32,
    pub check_in_time: String,
    pub check_out_time: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

impl Hotel {
    /// Check-in time as `HH:MM`.
    pub fn check_in_clock(&self) -> String {
        clock(&self.check_in_time).unwrap_or_else(|| DEFAULT_CHECK_IN_TIME.to_string())
    }

    /// Check-out time as `HH:MM`.
    pub fn check_out_clock(&self) -> String {
        clock(&self.check_out_time).unwrap_or_else(|| DEFAULT_CHECK_OUT_TIME.to_string())
    }

    /// "City, State, Country" with empty parts skipped.
    pub fn location(&self) -> String {
        [&self.city, &self.state, &self.country]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn rating_badge(&self) -> RatingBadge {
        RatingBadge::for_rating(self.rating)
    }

    /// Copy the editable fields into a create/update payload.
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
            price_per_night: self.price_per_night,
            rating: self.rating,
            available_rooms: self.available_rooms,
            check_in_time: self.check_in_clock(),
            check_out_time: self.check_out_clock(),
            amenities: self.amenities.clone(),
            images: self.images.clone(),
        }
    }
}

/// Normalize `HH:MM`, `HH:MM:SS` or an RFC 3339 timestamp to `HH:MM`.
fn clock(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.format("%H:%M").to_string());
    }
    let mut parts = raw.split(':');
    let hours: u8 = parts.next()?.parse().ok()?;
    let minutes: u8 = parts.next()?.parse().ok()?;
    (hours < 24 && minutes < 60).then(|| format!("{hours:02}:{minutes:02}"))
}

/// Create/update payload sent by administrators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelDraft {
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub price_per_night: f64,
    pub rating: f64,
    #[serde(rename = "avaiable_rooms")]
    pub available_rooms: u32,
    pub check_in_time: String,
    pub check_out_time: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

/// Hotel id to "has rooms for these dates".
pub type Availability = HashMap<String, bool>;

/// Visual weight of a rating chip in the admin hotel table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBadge {
    Success,
    Warning,
    Default,
}

impl RatingBadge {
    pub fn for_rating(rating: f64) -> Self {
        if rating >= 4.0 {
            RatingBadge::Success
        } else if rating >= 3.0 {
            RatingBadge::Warning
        } else {
            RatingBadge::Default
        }
    }
}
