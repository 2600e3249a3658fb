//! PostgreSQL-backed [`ContactRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{AccountId, ContactId, ContactSummary};

use super::diesel_error_mapping::{PersistenceErrorKind, map_diesel_error, map_pool_error};
use super::models::ContactRow;
use super::pool::DbPool;
use super::schema::contacts;

impl PersistenceErrorKind for ContactRepositoryError {
    fn connection(message: String) -> Self {
        Self::Connection { message }
    }

    fn query(message: String) -> Self {
        Self::Query { message }
    }
}

/// Diesel implementation of the contact repository port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn find_summary(
        &self,
        account: AccountId,
        id: ContactId,
    ) -> Result<Option<ContactSummary>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ContactRow> = contacts::table
            .filter(contacts::account_id.eq(account.get()))
            .filter(contacts::id.eq(id.get()))
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(ContactSummary::from))
    }
}
