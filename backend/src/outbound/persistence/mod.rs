//! PostgreSQL persistence adapters.
//!
//! Repositories translate between Diesel rows and domain types and nothing
//! more. Row structs and the schema stay private to this module. Queries run
//! on `diesel-async` connections drawn from a shared `bb8` pool.
//!
//! ```no_run
//! use crm_backend::outbound::persistence::{DbPool, DieselCallRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/crm")).await?;
//! let _calls = DieselCallRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_call_repository;
mod diesel_contact_repository;
mod diesel_error_mapping;
mod diesel_gift_repository;
mod migrations;
mod models;
mod paging;
mod pool;
mod schema;

pub use diesel_call_repository::DieselCallRepository;
pub use diesel_contact_repository::DieselContactRepository;
pub use diesel_gift_repository::DieselGiftRepository;
pub use migrations::{MigrationError, run_pending_migrations, run_pending_migrations_blocking};
pub use pool::{DbPool, PoolConfig, PoolError};
