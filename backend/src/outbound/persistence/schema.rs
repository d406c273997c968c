//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. When a
//! migration changes a table, update the matching block here (or regenerate
//! it with `diesel print-schema`).

diesel::table! {
    /// Household members.
    users (id) {
        /// Store-generated serial identifier.
        id -> Int4,
        /// Member name (max 64 characters). Names may repeat.
        name -> Varchar,
        /// Optional display colour, usually a CSS hex value.
        color -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Read-only country reference data.
    countries (id) {
        id -> Int4,
        /// Two-letter region code.
        country_code -> Varchar,
        /// English country name.
        country_name -> Varchar,
    }
}

diesel::table! {
    /// One row per (member, country) visit.
    ///
    /// `(user_id, country_code)` is unique and `user_id` cascades on delete.
    visited_countries (id) {
        id -> Int4,
        country_code -> Varchar,
        user_id -> Int4,
    }
}

diesel::joinable!(visited_countries -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(countries, users, visited_countries);
