//! Outbound adapters implementing the driven ports.
//!
//! - `persistence`: PostgreSQL repositories on Diesel.
//!
//! Adapters translate between domain types and storage and hold no business
//! rules.

pub mod persistence;
