//! Diesel row structs. Internal to the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{AccountId, Call, CallId, ContactId, ContactSummary, Gift, GiftId};

use super::schema::{calls, contacts, gifts};

/// Short-form contact columns.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: i64,
    pub account_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub gender: Option<String>,
    pub is_partial: bool,
    pub is_dead: bool,
}

impl From<ContactRow> for ContactSummary {
    fn from(row: ContactRow) -> Self {
        Self {
            id: ContactId::new(row.id),
            account_id: AccountId::new(row.account_id),
            first_name: row.first_name,
            last_name: row.last_name,
            nickname: row.nickname,
            gender: row.gender,
            is_partial: row.is_partial,
            is_dead: row.is_dead,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = calls)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CallRow {
    pub id: i64,
    pub account_id: i64,
    pub contact_id: i64,
    pub content: String,
    pub called_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CallRow {
    /// Combine with the contact row it joins to.
    pub fn into_call(self, contact: ContactSummary) -> Call {
        debug_assert_eq!(contact.id.get(), self.contact_id);
        Call {
            id: CallId::new(self.id),
            account_id: AccountId::new(self.account_id),
            contact,
            content: self.content,
            called_at: self.called_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = calls)]
pub(crate) struct NewCallRow<'a> {
    pub account_id: i64,
    pub contact_id: i64,
    pub content: &'a str,
    pub called_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of the caller-controlled call columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = calls)]
pub(crate) struct CallReplacement<'a> {
    pub contact_id: i64,
    pub content: &'a str,
    pub called_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = gifts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GiftRow {
    pub id: i64,
    pub account_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl GiftRow {
    pub fn into_gift(self, contact: ContactSummary) -> Gift {
        Gift {
            id: GiftId::new(self.id),
            account_id: AccountId::new(self.account_id),
            contact,
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
