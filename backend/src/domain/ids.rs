//! Integer identifiers for persisted CRM entities.
//!
//! Every table keys rows by a 64-bit integer. Wrapping each key in its own
//! newtype keeps a contact id from being passed where a call id is expected.

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database key.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Access the raw database key.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Tenant boundary; every other entity belongs to exactly one account.
    AccountId
}

define_id! {
    /// Authenticated user identifier.
    UserId
}

define_id! {
    /// Contact identifier.
    ContactId
}

define_id! {
    /// Call identifier.
    CallId
}

define_id! {
    /// Gift identifier.
    GiftId
}
