//! JSON presenters for API resources.
//!
//! Each presenter turns a domain record into the exact document clients see.
//! Single resources are wrapped in [`DataEnvelope`], deletions answer with
//! [`DeletedResource`], and collections go through
//! [`crate::inbound::http::listing::render_page`].

mod call;
mod contact;
mod gift;
mod timestamp;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::AccountId;

pub use self::call::CallResource;
pub use self::contact::ContactShortResource;
pub use self::gift::GiftResource;
pub use self::timestamp::{DEFAULT_TIMESTAMP_FORMAT, TimestampFormat, TimestampFormatError};

/// `{ id }` reference to the owning account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct AccountRef {
    /// Account key.
    #[schema(example = 1)]
    pub id: i64,
}

impl From<AccountId> for AccountRef {
    fn from(value: AccountId) -> Self {
        Self { id: value.get() }
    }
}

/// `{ "data": ... }` wrapper for a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DataEnvelope<T> {
    /// The resource.
    pub data: T,
}

impl<T> DataEnvelope<T> {
    /// Wrap `data`.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `{ "deleted": true, "id": ... }` acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeletedResource {
    /// Always `true`.
    pub deleted: bool,
    /// Key of the removed resource.
    #[schema(example = 42)]
    pub id: i64,
}

impl DeletedResource {
    /// Acknowledge removal of `id`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self { deleted: true, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Call, CallId, ContactId, ContactSummary, Gift, GiftId};
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 2, hour, 0, 0)
            .single()
            .expect("valid date")
    }

    #[fixture]
    fn contact() -> ContactSummary {
        ContactSummary {
            id: ContactId::new(12),
            account_id: AccountId::new(1),
            first_name: "Ada".to_owned(),
            last_name: Some("Lovelace".to_owned()),
            nickname: None,
            gender: None,
            is_partial: false,
            is_dead: false,
        }
    }

    fn to_json<T: Serialize>(value: &T) -> Value {
        serde_json::to_value(value).expect("resource serialises")
    }

    #[rstest]
    fn call_document_has_every_field(contact: ContactSummary) {
        let call = Call {
            id: CallId::new(42),
            account_id: AccountId::new(1),
            contact,
            content: "Talked about the trip".to_owned(),
            called_at: at(9),
            created_at: at(10),
            updated_at: None,
        };

        let body = to_json(&DataEnvelope::new(CallResource::present(
            call,
            &TimestampFormat::default(),
        )));

        assert_eq!(
            body,
            json!({
                "data": {
                    "id": 42,
                    "object": "call",
                    "called_at": "2024-03-02T09:00:00Z",
                    "content": "Talked about the trip",
                    "contact": {
                        "id": 12,
                        "object": "contact",
                        "first_name": "Ada",
                        "last_name": "Lovelace",
                        "nickname": null,
                        "gender": null,
                        "is_partial": false,
                        "is_dead": false,
                        "account": { "id": 1 }
                    },
                    "account": { "id": 1 },
                    "created_at": "2024-03-02T10:00:00Z",
                    "updated_at": null
                }
            })
        );
    }

    #[rstest]
    fn gift_uses_configured_format(contact: ContactSummary) {
        let gift = Gift {
            id: GiftId::new(5),
            account_id: AccountId::new(1),
            contact,
            body: String::new(),
            created_at: at(8),
            updated_at: Some(at(11)),
        };
        let format = TimestampFormat::new("%d/%m/%Y %H:%M").expect("valid pattern");

        let body = to_json(&GiftResource::present(gift, &format));

        assert_eq!(body["object"], "gift");
        assert_eq!(body["body"], "");
        assert_eq!(body["created_at"], "02/03/2024 08:00");
        assert_eq!(body["updated_at"], "02/03/2024 11:00");
        assert_eq!(body["contact"]["object"], "contact");
    }

    #[rstest]
    fn deletion_acknowledgement() {
        assert_eq!(
            to_json(&DeletedResource::new(42)),
            json!({ "deleted": true, "id": 42 })
        );
    }
}
