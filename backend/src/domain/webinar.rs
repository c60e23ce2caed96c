//! Webinar aggregate.
//!
//! A webinar carries its identity, its organizer and a mutable seat count.
//! The entity stores values as given; seat rules live in the use cases that
//! mutate it (see [`crate::domain::ChangeSeatsService`]).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Validation errors returned when parsing webinar identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebinarValidationError {
    EmptyId,
    InvalidId,
}

impl fmt::Display for WebinarValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "webinar id must not be empty"),
            Self::InvalidId => write!(f, "webinar id must not contain whitespace"),
        }
    }
}

impl std::error::Error for WebinarValidationError {}

/// Stable webinar identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WebinarId(String);

impl WebinarId {
    /// Validate and construct a [`WebinarId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, WebinarValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`WebinarId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, WebinarValidationError> {
        if id.is_empty() {
            return Err(WebinarValidationError::EmptyId);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(WebinarValidationError::InvalidId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for WebinarId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for WebinarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<WebinarId> for String {
    fn from(value: WebinarId) -> Self {
        value.0
    }
}

impl TryFrom<String> for WebinarId {
    type Error = WebinarValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Input payload for constructing a [`Webinar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebinarDraft {
    pub id: WebinarId,
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: u32,
}

/// A scheduled webinar.
///
/// Serialised in camelCase with RFC 3339 timestamps:
///
/// ```
/// use webinars::domain::Webinar;
///
/// let webinar: Webinar = serde_json::from_str(
///     r#"{
///         "id": "webinar-id",
///         "organizerId": "alice",
///         "title": "Webinar title",
///         "startDate": "2024-01-01T00:00:00Z",
///         "endDate": "2024-01-01T01:00:00Z",
///         "seats": 100
///     }"#,
/// )
/// .expect("valid webinar");
/// assert_eq!(webinar.seats(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webinar {
    id: WebinarId,
    organizer_id: UserId,
    title: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    seats: u32,
}

impl Webinar {
    /// Build a webinar from a draft.
    pub fn new(draft: WebinarDraft) -> Self {
        let WebinarDraft {
            id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        } = draft;
        Self {
            id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        }
    }

    pub fn id(&self) -> &WebinarId {
        &self.id
    }

    pub fn organizer_id(&self) -> &UserId {
        &self.organizer_id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Current seat capacity.
    pub fn seats(&self) -> u32 {
        self.seats
    }

    /// Whether `user_id` organises this webinar.
    pub fn is_organizer(&self, user_id: &UserId) -> bool {
        &self.organizer_id == user_id
    }

    /// Overwrite the seat count. Callers are responsible for seat rules.
    pub(crate) fn set_seats(&mut self, seats: u32) {
        self.seats = seats;
    }
}
