//! Persistence adapters for the webinar repository port.
//!
//! Only an in-memory store ships here. Durable adapters implement the same
//! [`crate::domain::ports::WebinarRepository`] trait and map their driver
//! errors onto [`crate::domain::ports::WebinarRepositoryError`].

mod in_memory_webinar_repository;

pub use in_memory_webinar_repository::InMemoryWebinarRepository;
