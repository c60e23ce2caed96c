//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod change_seats_command;
mod webinar_repository;

pub use change_seats_command::{
    ChangeSeatsCommand, ChangeSeatsError, ChangeSeatsRequest, ChangeSeatsResponse,
};
#[cfg(test)]
pub use webinar_repository::MockWebinarRepository;
pub use webinar_repository::{
    FixtureWebinarRepository, WebinarRepository, WebinarRepositoryError,
};
