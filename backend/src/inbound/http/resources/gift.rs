//! Gift presenter.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Gift;

use super::{AccountRef, ContactShortResource, TimestampFormat};

/// Client-facing gift document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GiftResource {
    /// Gift key.
    #[schema(example = 5)]
    pub id: i64,
    /// Always `gift`.
    #[schema(value_type = String, example = "gift")]
    pub object: &'static str,
    /// Free-text description.
    pub body: String,
    /// Owning account.
    pub account: AccountRef,
    /// Recipient.
    pub contact: ContactShortResource,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp, or `null`.
    pub updated_at: Option<String>,
}

impl GiftResource {
    /// Present `gift` with timestamps rendered by `format`.
    #[must_use]
    pub fn present(gift: Gift, format: &TimestampFormat) -> Self {
        Self {
            id: gift.id.get(),
            object: "gift",
            body: gift.body,
            account: AccountRef::from(gift.account_id),
            contact: ContactShortResource::from(gift.contact),
            created_at: format.render(gift.created_at),
            updated_at: format.render_optional(gift.updated_at),
        }
    }
}
