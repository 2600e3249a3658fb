//! Diesel table definitions.
//!
//! Must match `backend/migrations`; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Tenants.
    accounts (id) {
        id -> Int8,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// People tracked by an account.
    contacts (id) {
        id -> Int8,
        account_id -> Int8,
        first_name -> Varchar,
        last_name -> Nullable<Varchar>,
        nickname -> Nullable<Varchar>,
        gender -> Nullable<Varchar>,
        is_partial -> Bool,
        is_dead -> Bool,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Logged calls. `content` is capped at 100000 characters by a check
    /// constraint.
    calls (id) {
        id -> Int8,
        account_id -> Int8,
        contact_id -> Int8,
        content -> Text,
        called_at -> Timestamptz,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Gifts for contacts.
    gifts (id) {
        id -> Int8,
        account_id -> Int8,
        contact_id -> Int8,
        body -> Text,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::joinable!(contacts -> accounts (account_id));
diesel::joinable!(calls -> contacts (contact_id));
diesel::joinable!(gifts -> contacts (contact_id));

diesel::allow_tables_to_appear_in_same_query!(accounts, contacts, calls, gifts);
