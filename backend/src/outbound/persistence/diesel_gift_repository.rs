//! PostgreSQL-backed [`GiftRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};

use crate::domain::ports::{GiftRepository, GiftRepositoryError};
use crate::domain::{AccountId, ContactId, Gift, GiftId};

use super::diesel_error_mapping::{PersistenceErrorKind, map_diesel_error, map_pool_error};
use super::models::{ContactRow, GiftRow};
use super::paging::{limit_offset, total};
use super::pool::DbPool;
use super::schema::{contacts, gifts};

impl PersistenceErrorKind for GiftRepositoryError {
    fn connection(message: String) -> Self {
        Self::Connection { message }
    }

    fn query(message: String) -> Self {
        Self::Query { message }
    }
}

/// Diesel implementation of the gift repository port.
#[derive(Clone)]
pub struct DieselGiftRepository {
    pool: DbPool,
}

impl DieselGiftRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn load_page(
        &self,
        account: AccountId,
        contact: Option<ContactId>,
        request: PageRequest,
    ) -> Result<Page<Gift>, GiftRepositoryError> {
        let (limit, offset) = limit_offset(request)
            .ok_or_else(|| GiftRepositoryError::query("page offset out of range"))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut count_query = gifts::table
            .filter(gifts::account_id.eq(account.get()))
            .count()
            .into_boxed();
        let mut rows_query = gifts::table
            .inner_join(contacts::table)
            .filter(gifts::account_id.eq(account.get()))
            .select((GiftRow::as_select(), ContactRow::as_select()))
            .order((gifts::created_at.desc(), gifts::id.desc()))
            .limit(limit)
            .offset(offset)
            .into_boxed();
        if let Some(contact) = contact {
            count_query = count_query.filter(gifts::contact_id.eq(contact.get()));
            rows_query = rows_query.filter(gifts::contact_id.eq(contact.get()));
        }

        let count: i64 = count_query
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let rows: Vec<(GiftRow, ContactRow)> =
            rows_query.load(&mut conn).await.map_err(map_diesel_error)?;

        let items = rows
            .into_iter()
            .map(|(gift, contact)| gift.into_gift(contact.into()))
            .collect();
        Ok(Page::new(items, total(count), request))
    }
}

#[async_trait]
impl GiftRepository for DieselGiftRepository {
    async fn list_for_account(
        &self,
        account: AccountId,
        request: PageRequest,
    ) -> Result<Page<Gift>, GiftRepositoryError> {
        self.load_page(account, None, request).await
    }

    async fn list_for_contact(
        &self,
        account: AccountId,
        contact: ContactId,
        request: PageRequest,
    ) -> Result<Page<Gift>, GiftRepositoryError> {
        self.load_page(account, Some(contact), request).await
    }

    async fn find(
        &self,
        account: AccountId,
        id: GiftId,
    ) -> Result<Option<Gift>, GiftRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<(GiftRow, ContactRow)> = gifts::table
            .inner_join(contacts::table)
            .filter(gifts::account_id.eq(account.get()))
            .filter(gifts::id.eq(id.get()))
            .select((GiftRow::as_select(), ContactRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(|(gift, contact)| gift.into_gift(contact.into())))
    }
}
