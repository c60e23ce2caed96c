//! Port for webinar persistence.
//!
//! The [`WebinarRepository`] trait is the only boundary the webinar use cases
//! call outward through. Adapters own the canonical webinar records; use cases
//! borrow a copy for the duration of one operation and write the mutated copy
//! back through [`WebinarRepository::update`].

use async_trait::async_trait;

use crate::domain::{Webinar, WebinarId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by webinar repository adapters.
    pub enum WebinarRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "webinar repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "webinar repository query failed: {message}",
        /// An update targeted a webinar the repository does not hold.
        Missing { webinar_id: WebinarId } =>
            "webinar {webinar_id} is not stored",
    }
}

/// Port for webinar lookup and update.
///
/// Single-record operations are assumed atomic at the storage boundary; no
/// transactional or optimistic concurrency semantics are part of the contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Fetch a webinar by identifier.
    ///
    /// Returns `None` when no record matches.
    async fn find_by_id(
        &self,
        id: &WebinarId,
    ) -> Result<Option<Webinar>, WebinarRepositoryError>;

    /// Replace the stored record sharing `webinar`'s identifier.
    async fn update(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError>;
}

/// Fixture implementation for tests that do not exercise webinar storage.
///
/// Lookups always return `None` and updates are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureWebinarRepository;

#[async_trait]
impl WebinarRepository for FixtureWebinarRepository {
    async fn find_by_id(
        &self,
        _id: &WebinarId,
    ) -> Result<Option<Webinar>, WebinarRepositoryError> {
        Ok(None)
    }

    async fn update(&self, _webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        Ok(())
    }
}
