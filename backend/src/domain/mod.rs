//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed webinar entities and the use cases that
//! mutate them. Use cases depend only on the port traits in [`ports`], so any
//! storage adapter can back them.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User (alias to `user::User`): caller identity and display name.
//! - Webinar (alias to `webinar::Webinar`): webinar aggregate.
//! - SeatPolicy (alias to `seat_policy::SeatPolicy`): seat ceiling.
//! - ChangeSeatsService: seat change use case.

pub mod error;
pub mod ports;
pub mod seat_policy;
pub mod user;
pub mod webinar;

mod change_seats_service;

pub use self::change_seats_service::ChangeSeatsService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::seat_policy::{SeatPolicy, SeatPolicyError};
pub use self::user::{DisplayName, User, UserId, UserValidationError};
pub use self::webinar::{Webinar, WebinarDraft, WebinarId, WebinarValidationError};
