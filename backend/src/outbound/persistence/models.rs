//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use diesel::sql_types::Varchar;

use super::schema::{users, visited_countries};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
}

/// Insertable struct for creating members. The id is generated by the store.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub color: Option<&'a str>,
}

/// Insertable struct for recording a visit.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = visited_countries)]
pub(crate) struct NewVisitRow<'a> {
    pub country_code: &'a str,
    pub user_id: i32,
}

/// Single-column result of the country name search.
#[derive(Debug, Clone, QueryableByName)]
pub(crate) struct CountryCodeRow {
    #[diesel(sql_type = Varchar)]
    pub country_code: String,
}
