//! PostgreSQL-backed colour store.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{ColourRepository, ColourRepositoryError};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::NewColourRow;
use super::pool::DbPool;
use super::schema::colours;

/// Diesel-backed implementation of the [`ColourRepository`] port.
///
/// Each save inserts one row keyed by a fresh UUID.
#[derive(Clone)]
pub struct DieselColourRepository {
    pool: DbPool,
}

impl DieselColourRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ColourRepository for DieselColourRepository {
    async fn save(&self, colour: &str) -> Result<(), ColourRepositoryError> {
        let row = NewColourRow {
            id: Uuid::new_v4(),
            hex: colour,
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(colours::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|error| map_diesel_error(error, "colour insert"))?;
        debug!(id = %row.id, "colour row inserted");
        Ok(())
    }
}
