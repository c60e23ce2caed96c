//! Seat change domain service.
//!
//! Implements the [`ChangeSeatsCommand`] driving port on top of any
//! [`WebinarRepository`] adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::SeatPolicy;
use crate::domain::ports::{
    ChangeSeatsCommand, ChangeSeatsError, ChangeSeatsRequest, ChangeSeatsResponse,
    WebinarRepository,
};

/// Seat change service implementing the command driving port.
#[derive(Clone)]
pub struct ChangeSeatsService<R> {
    webinar_repo: Arc<R>,
    policy: SeatPolicy,
}

impl<R> ChangeSeatsService<R> {
    /// Create a service using the default seat policy.
    pub fn new(webinar_repo: Arc<R>) -> Self {
        Self::with_policy(webinar_repo, SeatPolicy::default())
    }

    /// Create a service enforcing a specific seat policy.
    pub fn with_policy(webinar_repo: Arc<R>, policy: SeatPolicy) -> Self {
        Self {
            webinar_repo,
            policy,
        }
    }
}

#[async_trait]
impl<R> ChangeSeatsCommand for ChangeSeatsService<R>
where
    R: WebinarRepository,
{
    async fn execute(
        &self,
        request: ChangeSeatsRequest,
    ) -> Result<ChangeSeatsResponse, ChangeSeatsError> {
        let ChangeSeatsRequest {
            user,
            webinar_id,
            seats,
        } = request;

        let Some(mut webinar) = self.webinar_repo.find_by_id(&webinar_id).await? else {
            debug!(%webinar_id, "seat change rejected: webinar not found");
            return Err(ChangeSeatsError::webinar_not_found(webinar_id));
        };

        if !webinar.is_organizer(user.id()) {
            debug!(%webinar_id, user_id = %user.id(), "seat change rejected: not the organizer");
            return Err(ChangeSeatsError::webinar_not_organizer(
                webinar_id,
                user.id().clone(),
            ));
        }

        let previous_seats = webinar.seats();
        if seats < previous_seats {
            debug!(%webinar_id, previous_seats, seats, "seat change rejected: reduction");
            return Err(ChangeSeatsError::webinar_reduce_seats(previous_seats, seats));
        }

        if self.policy.exceeds_ceiling(seats) {
            debug!(
                %webinar_id,
                seats,
                max_seats = self.policy.max_seats(),
                "seat change rejected: above ceiling"
            );
            return Err(ChangeSeatsError::webinar_too_many_seats(
                seats,
                self.policy.max_seats(),
            ));
        }

        webinar.set_seats(seats);
        self.webinar_repo.update(&webinar).await?;

        info!(%webinar_id, previous_seats, seats, "webinar seats changed");
        Ok(ChangeSeatsResponse {
            webinar_id,
            previous_seats,
            seats,
        })
    }
}

#[cfg(test)]
#[path = "change_seats_service_tests.rs"]
mod tests;
