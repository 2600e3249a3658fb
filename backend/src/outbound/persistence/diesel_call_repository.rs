//! PostgreSQL-backed [`CallRepository`].
//!
//! Every statement filters on `calls.account_id` before matching the call or
//! contact key. Inserts write the account id in the same statement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};

use crate::domain::ports::{CallRepository, CallRepositoryError};
use crate::domain::{AccountId, Call, CallDraft, CallId, ContactId, ContactSummary};

use super::diesel_error_mapping::{
    PersistenceErrorKind, map_diesel_error, map_diesel_write_error, map_pool_error,
};
use super::models::{CallReplacement, CallRow, ContactRow, NewCallRow};
use super::paging::{limit_offset, total};
use super::pool::DbPool;
use super::schema::{calls, contacts};

impl PersistenceErrorKind for CallRepositoryError {
    fn connection(message: String) -> Self {
        Self::Connection { message }
    }

    fn query(message: String) -> Self {
        Self::Query { message }
    }

    fn constraint(message: String) -> Self {
        Self::Constraint { message }
    }
}

/// Diesel implementation of the call repository port.
#[derive(Clone)]
pub struct DieselCallRepository {
    pool: DbPool,
}

impl DieselCallRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn load_page(
        &self,
        account: AccountId,
        contact: Option<ContactId>,
        request: PageRequest,
    ) -> Result<Page<Call>, CallRepositoryError> {
        let (limit, offset) = limit_offset(request)
            .ok_or_else(|| CallRepositoryError::query("page offset out of range"))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut count_query = calls::table
            .filter(calls::account_id.eq(account.get()))
            .count()
            .into_boxed();
        let mut rows_query = calls::table
            .inner_join(contacts::table)
            .filter(calls::account_id.eq(account.get()))
            .select((CallRow::as_select(), ContactRow::as_select()))
            .order((calls::called_at.desc(), calls::id.desc()))
            .limit(limit)
            .offset(offset)
            .into_boxed();
        if let Some(contact) = contact {
            count_query = count_query.filter(calls::contact_id.eq(contact.get()));
            rows_query = rows_query.filter(calls::contact_id.eq(contact.get()));
        }

        let count: i64 = count_query
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let rows: Vec<(CallRow, ContactRow)> =
            rows_query.load(&mut conn).await.map_err(map_diesel_error)?;

        let items = rows
            .into_iter()
            .map(|(call, contact)| call.into_call(contact.into()))
            .collect();
        Ok(Page::new(items, total(count), request))
    }
}

#[async_trait]
impl CallRepository for DieselCallRepository {
    async fn list_for_account(
        &self,
        account: AccountId,
        request: PageRequest,
    ) -> Result<Page<Call>, CallRepositoryError> {
        self.load_page(account, None, request).await
    }

    async fn list_for_contact(
        &self,
        account: AccountId,
        contact: ContactId,
        request: PageRequest,
    ) -> Result<Page<Call>, CallRepositoryError> {
        self.load_page(account, Some(contact), request).await
    }

    async fn find(
        &self,
        account: AccountId,
        id: CallId,
    ) -> Result<Option<Call>, CallRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<(CallRow, ContactRow)> = calls::table
            .inner_join(contacts::table)
            .filter(calls::account_id.eq(account.get()))
            .filter(calls::id.eq(id.get()))
            .select((CallRow::as_select(), ContactRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(|(call, contact)| call.into_call(contact.into())))
    }

    async fn insert(
        &self,
        account: AccountId,
        contact: &ContactSummary,
        draft: &CallDraft,
        at: DateTime<Utc>,
    ) -> Result<Call, CallRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewCallRow {
            account_id: account.get(),
            contact_id: contact.id.get(),
            content: draft.content.as_str(),
            called_at: draft.called_at,
            created_at: at,
        };
        let inserted: CallRow = diesel::insert_into(calls::table)
            .values(&row)
            .returning(CallRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_write_error)?;
        Ok(inserted.into_call(contact.clone()))
    }

    async fn update(
        &self,
        account: AccountId,
        id: CallId,
        contact: &ContactSummary,
        draft: &CallDraft,
        at: DateTime<Utc>,
    ) -> Result<Option<Call>, CallRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = CallReplacement {
            contact_id: contact.id.get(),
            content: draft.content.as_str(),
            called_at: draft.called_at,
            updated_at: at,
        };
        let updated: Option<CallRow> = diesel::update(
            calls::table
                .filter(calls::account_id.eq(account.get()))
                .filter(calls::id.eq(id.get())),
        )
        .set(&changes)
        .returning(CallRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_write_error)?;
        Ok(updated.map(|row| row.into_call(contact.clone())))
    }

    async fn delete(&self, account: AccountId, id: CallId) -> Result<bool, CallRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(
            calls::table
                .filter(calls::account_id.eq(account.get()))
                .filter(calls::id.eq(id.get())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
