//! Webinar management library.
//!
//! The domain layer holds the webinar aggregate, its ports and the seat change
//! use case; outbound adapters implement the ports.

pub mod domain;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use settings::WebinarSettings;
