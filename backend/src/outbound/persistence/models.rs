//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::colours;

/// Insertable struct for new colour records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = colours)]
pub(crate) struct NewColourRow<'a> {
    pub id: Uuid,
    pub hex: &'a str,
}
