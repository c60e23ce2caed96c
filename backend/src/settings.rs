//! Webinar settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{SeatPolicy, SeatPolicyError};

/// Configuration values for webinar use cases.
///
/// Read from `WEBINARS_*` environment variables and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WEBINARS")]
pub struct WebinarSettings {
    /// Highest seat count a webinar may be given.
    #[ortho_config(default = 1000)]
    pub max_seats: u32,
}

impl WebinarSettings {
    /// Return the seat policy for the configured ceiling.
    pub fn seat_policy(&self) -> Result<SeatPolicy, SeatPolicyError> {
        SeatPolicy::new(self.max_seats)
    }
}
