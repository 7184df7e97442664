//! Booking model - a single table reservation

use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where the party wants to be seated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Seating {
    #[default]
    Indoor,
    Outdoor,
}

impl Seating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seating::Indoor => "indoor",
            Seating::Outdoor => "outdoor",
        }
    }
}

impl fmt::Display for Seating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a seating name is neither `indoor` nor `outdoor`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown seating '{0}'")]
pub struct UnknownSeating(pub String);

impl FromStr for Seating {
    type Err = UnknownSeating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "indoor" => Ok(Seating::Indoor),
            "outdoor" => Ok(Seating::Outdoor),
            other => Err(UnknownSeating(other.to_string())),
        }
    }
}

/// A stored reservation.
///
/// `id` and `created_at` are assigned once by [`Booking::from_new`] and never
/// change afterwards; an update replaces every other field wholesale.
/// Date, time, guest count and creation time are kept as stored, unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub seating: Seating,
    pub special_requests: String,
    /// ISO-8601 timestamp, millisecond precision when created here
    pub created_at: String,
}

/// Caller-supplied booking data, before an id and creation time exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub seating: Seating,
    pub special_requests: String,
}

impl Booking {
    pub fn from_new(data: NewBooking) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: data.date,
            time: data.time,
            guests: data.guests,
            seating: data.seating,
            special_requests: data.special_requests,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Copy of this booking with the caller-editable fields replaced
    pub fn with_details(&self, data: NewBooking) -> Self {
        Self {
            id: self.id.clone(),
            date: data.date,
            time: data.time,
            guests: data.guests,
            seating: data.seating,
            special_requests: data.special_requests,
            created_at: self.created_at.clone(),
        }
    }
}
