//! Test utilities for the webinars crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`, via
//! the `test-support` feature). Every helper builds fresh values so tests
//! never share mutable state.

pub mod seeds {
    //! Factories for users and webinars used across test suites.

    use chrono::{DateTime, Utc};

    use crate::domain::{User, Webinar, WebinarDraft, WebinarId};

    /// Identifier of the webinar built by [`webinar_organised_by`].
    pub const WEBINAR_ID: &str = "webinar-id";

    /// Organizer of the seeded webinar.
    pub fn alice() -> User {
        User::from_strings("alice", "Alice Martin")
    }

    /// A user who organises nothing.
    pub fn bob() -> User {
        User::from_strings("bob", "Bob Durand")
    }

    pub fn webinar_id() -> WebinarId {
        WebinarId::new(WEBINAR_ID)
            .unwrap_or_else(|error| panic!("seed webinar id must be valid: {error}"))
    }

    /// The one-hour webinar on 2024-01-01 identified by [`WEBINAR_ID`].
    pub fn webinar_organised_by(organizer: &User, seats: u32) -> Webinar {
        webinar_with_id(webinar_id(), organizer, seats)
    }

    pub fn webinar_with_id(id: WebinarId, organizer: &User, seats: u32) -> Webinar {
        Webinar::new(WebinarDraft {
            id,
            organizer_id: organizer.id().clone(),
            title: "Webinar title".to_owned(),
            start_date: timestamp("2024-01-01T00:00:00Z"),
            end_date: timestamp("2024-01-01T01:00:00Z"),
            seats,
        })
    }

    fn timestamp(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value)
            .map(|parsed| parsed.with_timezone(&Utc))
            .unwrap_or_else(|error| panic!("seed timestamp must be RFC 3339: {error}"))
    }
}
