//! Fetcher: obtains a colour through the [`ColourSource`] port.

use std::sync::Arc;
use std::time::Duration;

use tracing::{Instrument, Span, debug, info_span, warn};

use crate::domain::ports::{ColourSource, ColourSourceError};
use crate::domain::{Colour, ColourServiceError};

/// Retrieves one colour per call from an injected source.
///
/// A single attempt is made. An optional deadline bounds the wait on the
/// source; the source's own transport timeout still applies underneath.
pub struct ColourFetcher<S: ?Sized> {
    source: Arc<S>,
    deadline: Option<Duration>,
    span: Span,
}

impl<S: ?Sized> ColourFetcher<S> {
    /// Create a fetcher with no deadline, logging under a `colour_fetcher` span.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            deadline: None,
            span: info_span!("colour_fetcher"),
        }
    }

    /// Bound each fetch by `deadline`.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Record events under `span` instead of the default one.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl<S> ColourFetcher<S>
where
    S: ColourSource + ?Sized,
{
    /// Fetch one colour, returning the source's value verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ColourServiceError::Transport`] when the source fails or the
    /// deadline elapses first.
    pub async fn fetch(&self) -> Result<Colour, ColourServiceError> {
        async {
            debug!(deadline_ms = self.deadline.map(duration_millis), "requesting colour");
            let outcome = match self.deadline {
                Some(deadline) => tokio::time::timeout(deadline, self.source.get_colour())
                    .await
                    .unwrap_or_else(|_| Err(deadline_exceeded(deadline))),
                None => self.source.get_colour().await,
            };

            let value = outcome.map_err(|error| {
                warn!(%error, "colour source failed");
                ColourServiceError::from(error)
            })?;
            debug!(bytes = value.len(), "colour received");
            Ok(Colour::from(value))
        }
        .instrument(self.span.clone())
        .await
    }
}

fn deadline_exceeded(deadline: Duration) -> ColourSourceError {
    ColourSourceError::timeout(format!(
        "deadline of {}ms exceeded",
        duration_millis(deadline)
    ))
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
