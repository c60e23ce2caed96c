//! Driving port for changing the seat capacity of a webinar.
//!
//! Adapters call [`ChangeSeatsCommand::execute`] with an authenticated user and
//! receive either the new seat count or one of the [`ChangeSeatsError`] kinds.
//! Each kind maps onto the transport-agnostic [`Error`] envelope through
//! `From<ChangeSeatsError>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, User, UserId, WebinarId};

use super::{WebinarRepositoryError, define_port_error};

define_port_error! {
    /// Reasons a seat change is refused.
    ///
    /// None of these are transient: retrying the same request yields the same
    /// outcome unless the stored webinar changes in between.
    pub enum ChangeSeatsError {
        /// No webinar matches the requested identifier.
        WebinarNotFound { webinar_id: WebinarId } =>
            "webinar {webinar_id} not found",
        /// The requesting user does not organise the webinar.
        WebinarNotOrganizer { webinar_id: WebinarId, user_id: UserId } =>
            "user {user_id} is not the organizer of webinar {webinar_id}",
        /// The request would lower the seat count.
        WebinarReduceSeats { current: u32, requested: u32 } =>
            "webinar seats cannot be reduced from {current} to {requested}",
        /// The request exceeds the seat ceiling.
        WebinarTooManySeats { requested: u32, max: u32 } =>
            "webinar seats cannot exceed {max} (requested {requested})",
        /// The repository failed while reading or writing the webinar.
        Repository { source: WebinarRepositoryError } =>
            "webinar repository failure: {source}",
    }
}

impl From<WebinarRepositoryError> for ChangeSeatsError {
    fn from(value: WebinarRepositoryError) -> Self {
        Self::repository(value)
    }
}

impl From<ChangeSeatsError> for Error {
    fn from(value: ChangeSeatsError) -> Self {
        let message = value.to_string();
        let reason = value.kind();
        match value {
            ChangeSeatsError::WebinarNotFound { webinar_id } => Error::not_found(message)
                .with_details(json!({ "webinarId": webinar_id }))
                .with_reason_code(reason),
            ChangeSeatsError::WebinarNotOrganizer { webinar_id, .. } => Error::forbidden(message)
                .with_details(json!({ "webinarId": webinar_id }))
                .with_reason_code(reason),
            ChangeSeatsError::WebinarReduceSeats { current, requested } => {
                Error::invalid_request(message)
                    .with_details(json!({
                        "currentSeats": current,
                        "requestedSeats": requested,
                    }))
                    .with_reason_code(reason)
            }
            ChangeSeatsError::WebinarTooManySeats { requested, max } => {
                Error::invalid_request(message)
                    .with_details(json!({
                        "requestedSeats": requested,
                        "maxSeats": max,
                    }))
                    .with_reason_code(reason)
            }
            ChangeSeatsError::Repository {
                source: WebinarRepositoryError::Connection { .. },
            } => Error::service_unavailable(message),
            ChangeSeatsError::Repository { .. } => Error::internal(message),
        }
    }
}

/// Request to change the seat count of a webinar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSeatsRequest {
    /// Authenticated user issuing the change.
    pub user: User,
    pub webinar_id: WebinarId,
    /// Requested seat capacity.
    pub seats: u32,
}

/// Outcome of a successful seat change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSeatsResponse {
    pub webinar_id: WebinarId,
    pub previous_seats: u32,
    pub seats: u32,
}

/// Driving port for webinar seat changes.
#[async_trait]
pub trait ChangeSeatsCommand: Send + Sync {
    /// Change the seat capacity of a webinar.
    ///
    /// Checks run in order and stop at the first failure: the webinar must
    /// exist, the user must organise it, the seat count may not decrease and
    /// may not exceed the ceiling. The stored webinar is untouched whenever an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use webinars::domain::{ChangeSeatsService, User, WebinarId};
    /// # use webinars::domain::ports::{ChangeSeatsCommand, ChangeSeatsError, ChangeSeatsRequest};
    /// # use webinars::outbound::persistence::InMemoryWebinarRepository;
    /// # async fn example() -> Result<(), ChangeSeatsError> {
    /// let service = ChangeSeatsService::new(Arc::new(InMemoryWebinarRepository::default()));
    /// let response = service
    ///     .execute(ChangeSeatsRequest {
    ///         user: User::from_strings("alice", "Alice Martin"),
    ///         webinar_id: WebinarId::new("webinar-id").expect("valid webinar id"),
    ///         seats: 200,
    ///     })
    ///     .await?;
    /// assert_eq!(response.seats, 200);
    /// # Ok(())
    /// # }
    /// ```
    async fn execute(
        &self,
        request: ChangeSeatsRequest,
    ) -> Result<ChangeSeatsResponse, ChangeSeatsError>;
}
