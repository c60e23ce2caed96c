//! Seat capacity rules applied when webinar seats change.

use std::fmt;

/// Errors raised when building a [`SeatPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatPolicyError {
    ZeroCeiling,
}

impl fmt::Display for SeatPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCeiling => write!(f, "seat ceiling must be at least 1"),
        }
    }
}

impl std::error::Error for SeatPolicyError {}

/// Upper bound on webinar seats.
///
/// The ceiling is inclusive: a webinar may hold exactly `max_seats` seats.
///
/// # Examples
/// ```
/// use webinars::domain::SeatPolicy;
///
/// let policy = SeatPolicy::default();
/// assert_eq!(policy.max_seats(), 1000);
/// assert!(!policy.exceeds_ceiling(1000));
/// assert!(policy.exceeds_ceiling(1001));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatPolicy {
    max_seats: u32,
}

impl SeatPolicy {
    /// Default seat ceiling.
    pub const DEFAULT_MAX_SEATS: u32 = 1000;

    /// Build a policy with a custom ceiling.
    pub fn new(max_seats: u32) -> Result<Self, SeatPolicyError> {
        if max_seats == 0 {
            return Err(SeatPolicyError::ZeroCeiling);
        }
        Ok(Self { max_seats })
    }

    pub fn max_seats(&self) -> u32 {
        self.max_seats
    }

    /// Whether `seats` is above the ceiling.
    pub fn exceeds_ceiling(&self, seats: u32) -> bool {
        seats > self.max_seats
    }
}

impl Default for SeatPolicy {
    fn default() -> Self {
        Self {
            max_seats: Self::DEFAULT_MAX_SEATS,
        }
    }
}
