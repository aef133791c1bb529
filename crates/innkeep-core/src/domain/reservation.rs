use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use super::stay::{ReservationStatus, nights_between};

/// Reservation entity. Check-out is expected, not enforced, to follow check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub hotel_id: String,
    #[serde(default)]
    pub hotel_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(deserialize_with = "flexible_date")]
    pub check_in: NaiveDate,
    #[serde(deserialize_with = "flexible_date")]
    pub check_out: NaiveDate,
}

impl Reservation {
    pub fn nights(&self) -> i64 {
        nights_between(self.check_in, self.check_out)
    }

    pub fn status(&self, today: NaiveDate) -> ReservationStatus {
        ReservationStatus::derive(today, self.check_in, self.check_out)
    }
}

/// Body of a booking request; the hotel name is denormalized onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub hotel_id: String,
    pub hotel_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Accept `YYYY-MM-DD` or a full RFC 3339 timestamp, keeping the date part.
fn flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}

pub(crate) fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.date_naive())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}
