//! Translation of pool and Diesel failures into repository port errors.
//!
//! Client-visible messages stay generic; the database's own text is logged at
//! debug level only.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Constructors a repository error type offers for mapping.
pub(crate) trait PersistenceErrorKind: Sized {
    /// The database could not be reached.
    fn connection(message: String) -> Self;
    /// The query failed.
    fn query(message: String) -> Self;
    /// A constraint rejected a write. Read-only repositories report a query
    /// failure instead.
    fn constraint(message: String) -> Self {
        Self::query(message)
    }
}

pub(crate) fn map_pool_error<E: PersistenceErrorKind>(error: PoolError) -> E {
    debug!(error = %error, "database pool checkout failed");
    E::connection(error.message().to_owned())
}

pub(crate) fn map_diesel_error<E: PersistenceErrorKind>(error: DieselError) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::CheckViolation,
            info,
        ) => E::constraint(info.constraint_name().unwrap_or("unnamed").to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            E::connection("database connection error".to_owned())
        }
        DieselError::NotFound => E::query("record not found".to_owned()),
        _ => E::query("database error".to_owned()),
    }
}

/// Map a failed insert or update.
///
/// Any statement the database rejects is reported as a constraint failure, so
/// bad column values (such as a NUL byte in text) surface as invalid
/// parameters rather than server errors.
pub(crate) fn map_diesel_write_error<E: PersistenceErrorKind>(error: DieselError) -> E {
    match error {
        DieselError::DatabaseError(kind, info)
            if !matches!(kind, DatabaseErrorKind::ClosedConnection) =>
        {
            debug!(?kind, message = info.message(), "database rejected write");
            E::constraint(
                info.constraint_name()
                    .map_or_else(|| format!("{kind:?}"), ToOwned::to_owned),
            )
        }
        other => map_diesel_error(other),
    }
}
