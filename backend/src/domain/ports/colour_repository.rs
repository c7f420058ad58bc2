//! Driven port for persisting colours.
//!
//! Connection establishment and transaction semantics belong to the adapter;
//! the domain only hands over a value to write.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by colour storage adapters.
    pub enum ColourRepositoryError {
        /// Storage backend could not be reached.
        Connection { message: String } =>
            "{message}",
        /// The write itself failed.
        Write { message: String } =>
            "{message}",
    }
}

/// Port for writing a colour to storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ColourRepository: Send + Sync {
    /// Persist one colour string.
    async fn save(&self, colour: &str) -> Result<(), ColourRepositoryError>;
}

/// Fixture implementation that accepts and discards every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureColourRepository;

#[async_trait]
impl ColourRepository for FixtureColourRepository {
    async fn save(&self, _colour: &str) -> Result<(), ColourRepositoryError> {
        Ok(())
    }
}
