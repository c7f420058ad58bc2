//! Persister: validates a colour and writes it through the
//! [`ColourRepository`] port.

use std::sync::Arc;

use tracing::{Instrument, Span, debug, info_span, warn};

use crate::domain::ports::ColourRepository;
use crate::domain::{Colour, ColourServiceError};

/// Writes colours to an injected repository, rejecting empty values.
pub struct ColourPersister<R: ?Sized> {
    repository: Arc<R>,
    span: Span,
}

impl<R: ?Sized> ColourPersister<R> {
    /// Create a persister logging under a `colour_persister` span.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            span: info_span!("colour_persister"),
        }
    }

    /// Record events under `span` instead of the default one.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl<R> ColourPersister<R>
where
    R: ColourRepository + ?Sized,
{
    /// Save `colour`, performing exactly one repository write.
    ///
    /// # Errors
    ///
    /// Returns [`ColourServiceError::EmptyValue`] for an empty colour without
    /// touching the repository, or [`ColourServiceError::Storage`] when the
    /// write fails.
    pub async fn save(&self, colour: &Colour) -> Result<(), ColourServiceError> {
        async {
            if colour.is_empty() {
                warn!("refusing to save an empty colour");
                return Err(ColourServiceError::EmptyValue);
            }

            self.repository
                .save(colour.as_str())
                .await
                .map_err(|error| {
                    warn!(%error, "colour repository write failed");
                    ColourServiceError::from(error)
                })?;
            debug!(%colour, "colour saved");
            Ok(())
        }
        .instrument(self.span.clone())
        .await
    }
}

#[cfg(test)]
#[path = "colour_persister_tests.rs"]
mod tests;
