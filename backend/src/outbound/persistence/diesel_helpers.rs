//! Error mapping shared by Diesel repositories.

use tracing::debug;

use crate::domain::ports::ColourRepositoryError;

use super::pool::PoolError;

/// Extract a readable message from a pool error.
pub(crate) fn map_pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Extract a readable message from a Diesel error and emit debug context.
pub(crate) fn map_diesel_error_message(error: &diesel::result::Error, operation: &str) -> String {
    let error_message = error.to_string();
    debug!(%error_message, %operation, "diesel operation failed");
    error_message
}

/// Map pool errors to colour repository connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> ColourRepositoryError {
    ColourRepositoryError::connection(map_pool_error_message(error))
}

/// Map Diesel errors to colour repository errors.
///
/// A closed connection is reported as a connection failure; everything else
/// is a failed write.
pub(crate) fn map_diesel_error(
    error: diesel::result::Error,
    operation: &str,
) -> ColourRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let message = map_diesel_error_message(&error, operation);
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => ColourRepositoryError::connection(message),
        _ => ColourRepositoryError::write(message),
    }
}
