//! In-memory adapter for the webinar repository port.
//!
//! Records live in a map keyed by webinar id behind a `RwLock`. The adapter
//! backs tests and the `change-seats` harness; it offers no durability.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{WebinarRepository, WebinarRepositoryError};
use crate::domain::{Webinar, WebinarId};

/// Webinar repository storing records in process memory.
#[derive(Debug, Default)]
pub struct InMemoryWebinarRepository {
    store: RwLock<HashMap<WebinarId, Webinar>>,
}

fn poisoned<T>(_: PoisonError<T>) -> WebinarRepositoryError {
    WebinarRepositoryError::query("in-memory webinar store lock poisoned")
}

impl InMemoryWebinarRepository {
    /// Build a repository holding the given webinars.
    ///
    /// Later entries replace earlier ones sharing an id.
    pub fn with_webinars(webinars: impl IntoIterator<Item = Webinar>) -> Self {
        let store = webinars
            .into_iter()
            .map(|webinar| (webinar.id().clone(), webinar))
            .collect();
        Self {
            store: RwLock::new(store),
        }
    }

    /// Build a repository from a JSON array of webinars.
    ///
    /// # Examples
    /// ```
    /// use webinars::domain::WebinarId;
    /// use webinars::outbound::persistence::InMemoryWebinarRepository;
    ///
    /// let repo = InMemoryWebinarRepository::from_json(
    ///     r#"[{
    ///         "id": "webinar-id",
    ///         "organizerId": "alice",
    ///         "title": "Webinar title",
    ///         "startDate": "2024-01-01T00:00:00Z",
    ///         "endDate": "2024-01-01T01:00:00Z",
    ///         "seats": 100
    ///     }]"#,
    /// )?;
    /// let id = WebinarId::new("webinar-id").expect("valid webinar id");
    /// assert_eq!(repo.get(&id).map(|w| w.seats()), Some(100));
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn from_json(seed: &str) -> Result<Self, serde_json::Error> {
        let webinars: Vec<Webinar> = serde_json::from_str(seed)?;
        Ok(Self::with_webinars(webinars))
    }

    /// Insert or replace a webinar outside the repository port.
    pub fn insert(&self, webinar: Webinar) {
        self.write_recovering()
            .insert(webinar.id().clone(), webinar);
    }

    /// Synchronous snapshot of a stored webinar.
    pub fn get(&self, id: &WebinarId) -> Option<Webinar> {
        self.read_recovering().get(id).cloned()
    }

    /// Number of stored webinars.
    pub fn len(&self) -> usize {
        self.read_recovering().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_recovering(&self) -> RwLockReadGuard<'_, HashMap<WebinarId, Webinar>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_recovering(&self) -> RwLockWriteGuard<'_, HashMap<WebinarId, Webinar>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn find_by_id(
        &self,
        id: &WebinarId,
    ) -> Result<Option<Webinar>, WebinarRepositoryError> {
        let guard = self.store.read().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let mut guard = self.store.write().map_err(poisoned)?;
        let Some(stored) = guard.get_mut(webinar.id()) else {
            debug!(webinar_id = %webinar.id(), "update targeted an unknown webinar");
            return Err(WebinarRepositoryError::missing(webinar.id().clone()));
        };
        *stored = webinar.clone();
        Ok(())
    }
}
