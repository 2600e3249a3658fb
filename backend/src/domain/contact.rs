//! Contact summary embedded in call and gift records.

use super::{AccountId, ContactId};

/// Short form of a contact.
///
/// Only the fields shown alongside calls and gifts are loaded; the full
/// contact aggregate lives elsewhere in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSummary {
    /// Contact key.
    pub id: ContactId,
    /// Owning account.
    pub account_id: AccountId,
    /// Given name.
    pub first_name: String,
    /// Family name, if recorded.
    pub last_name: Option<String>,
    /// Nickname, if recorded.
    pub nickname: Option<String>,
    /// Free-form gender label, if recorded.
    pub gender: Option<String>,
    /// Whether the contact is a partial record attached to another contact.
    pub is_partial: bool,
    /// Whether the contact is deceased.
    pub is_dead: bool,
}

impl ContactSummary {
    /// Whether the contact belongs to `account`.
    #[must_use]
    pub fn belongs_to(&self, account: AccountId) -> bool {
        self.account_id == account
    }
}
