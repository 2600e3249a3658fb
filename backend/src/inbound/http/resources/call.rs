//! Call presenter.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Call;

use super::{AccountRef, ContactShortResource, TimestampFormat};

/// Client-facing call document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CallResource {
    /// Call key.
    #[schema(example = 42)]
    pub id: i64,
    /// Always `call`.
    #[schema(value_type = String, example = "call")]
    pub object: &'static str,
    /// When the call took place.
    #[schema(example = "2024-03-02T12:00:00Z")]
    pub called_at: String,
    /// Note text.
    #[schema(example = "Talked about the trip")]
    pub content: String,
    /// Contact the call was with.
    pub contact: ContactShortResource,
    /// Owning account.
    pub account: AccountRef,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp; `null` until the call is updated.
    pub updated_at: Option<String>,
}

impl CallResource {
    /// Present `call` with timestamps rendered by `format`.
    #[must_use]
    pub fn present(call: Call, format: &TimestampFormat) -> Self {
        Self {
            id: call.id.get(),
            object: "call",
            called_at: format.render(call.called_at),
            content: call.content,
            contact: ContactShortResource::from(call.contact),
            account: AccountRef::from(call.account_id),
            created_at: format.render(call.created_at),
            updated_at: format.render_optional(call.updated_at),
        }
    }
}
