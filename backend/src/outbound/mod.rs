//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and storage-specific
//! representations. They contain no business logic.
//!
//! - **persistence**: webinar storage adapters

pub mod persistence;
