//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`CallsCommand`, `CallsQuery`, `GiftsQuery`, `LoginService`)
//! are what inbound adapters call. Driven ports (`*Repository`) are what the
//! domain services need from persistence.

mod macros;
pub(crate) use macros::define_port_error;

mod call_repository;
mod calls_command;
mod calls_query;
mod contact_repository;
mod gift_repository;
mod gifts_query;
mod login_service;

pub use call_repository::{CallRepository, CallRepositoryError};
#[cfg(test)]
pub use call_repository::MockCallRepository;
pub use calls_command::CallsCommand;
#[cfg(test)]
pub use calls_command::MockCallsCommand;
pub use calls_query::CallsQuery;
#[cfg(test)]
pub use calls_query::MockCallsQuery;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use gift_repository::{GiftRepository, GiftRepositoryError};
#[cfg(test)]
pub use gift_repository::MockGiftRepository;
pub use gifts_query::GiftsQuery;
#[cfg(test)]
pub use gifts_query::MockGiftsQuery;
pub use login_service::{FIXTURE_USER, FixtureLoginService, LoginService};
#[cfg(test)]
pub use login_service::MockLoginService;
