//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the colour repository port backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Connections come from a pool built once at startup; repositories never
//!   reconnect per call.
//! - Database errors are mapped to `ColourRepositoryError` variants.
//!
//! # Example
//!
//! ```ignore
//! use hexbot::outbound::persistence::{DbPool, DieselColourRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/hexbot")).await?;
//! let repo = DieselColourRepository::new(pool);
//! ```

mod diesel_colour_repository;
mod diesel_helpers;
mod models;
mod pool;
mod schema;

pub use diesel_colour_repository::DieselColourRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
