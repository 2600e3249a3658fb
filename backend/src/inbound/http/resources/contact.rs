//! Short contact form embedded in call and gift payloads.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ContactSummary;

use super::AccountRef;

/// `{ id, object: "contact", ... }` summary of a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactShortResource {
    /// Contact key.
    #[schema(example = 12)]
    pub id: i64,
    /// Always `contact`.
    #[schema(value_type = String, example = "contact")]
    pub object: &'static str,
    /// Given name.
    #[schema(example = "Ada")]
    pub first_name: String,
    /// Family name.
    pub last_name: Option<String>,
    /// Nickname.
    pub nickname: Option<String>,
    /// Free-form gender label.
    pub gender: Option<String>,
    /// Whether the contact is a partial record.
    pub is_partial: bool,
    /// Whether the contact is deceased.
    pub is_dead: bool,
    /// Owning account.
    pub account: AccountRef,
}

impl From<ContactSummary> for ContactShortResource {
    fn from(value: ContactSummary) -> Self {
        Self {
            id: value.id.get(),
            object: "contact",
            first_name: value.first_name,
            last_name: value.last_name,
            nickname: value.nickname,
            gender: value.gender,
            is_partial: value.is_partial,
            is_dead: value.is_dead,
            account: AccountRef::from(value.account_id),
        }
    }
}
