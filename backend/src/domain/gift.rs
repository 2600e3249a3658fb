//! Gifts given to or planned for a contact.

use chrono::{DateTime, Utc};

use super::{AccountId, ContactSummary, GiftId};

/// A persisted gift together with its contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gift {
    /// Gift key.
    pub id: GiftId,
    /// Owning account.
    pub account_id: AccountId,
    /// Recipient.
    pub contact: ContactSummary,
    /// Free-text description; may be empty.
    pub body: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp, if ever modified.
    pub updated_at: Option<DateTime<Utc>>,
}
