//! Linear fetch-then-save orchestration.

use tracing::{Instrument, Span, error, info, info_span};

use crate::domain::ports::{ColourRepository, ColourSource};
use crate::domain::{Colour, ColourFetcher, ColourPersister, ColourServiceError};

/// Runs one fetch followed by one save.
///
/// Either stage failing aborts the run; the save stage never starts after a
/// failed fetch. Fetch and save are awaited one after the other, so a single
/// pipeline never has more than one port call in flight.
pub struct ColourPipeline<S: ?Sized, R: ?Sized> {
    fetcher: ColourFetcher<S>,
    persister: ColourPersister<R>,
    span: Span,
}

impl<S: ?Sized, R: ?Sized> ColourPipeline<S, R> {
    /// Compose a pipeline from its two stages.
    pub fn new(fetcher: ColourFetcher<S>, persister: ColourPersister<R>) -> Self {
        Self {
            fetcher,
            persister,
            span: info_span!("colour_pipeline"),
        }
    }

    /// Record events under `span` instead of the default one.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl<S, R> ColourPipeline<S, R>
where
    S: ColourSource + ?Sized,
    R: ColourRepository + ?Sized,
{
    /// Fetch a colour and persist it, returning the saved value.
    ///
    /// # Errors
    ///
    /// Returns the first stage error unchanged.
    pub async fn run(&self) -> Result<Colour, ColourServiceError> {
        async {
            let outcome = self.fetch_and_save().await;
            match &outcome {
                Ok(colour) => info!(%colour, "colour fetched and saved"),
                Err(err) => error!(stage = %err.stage(), error = %err, "colour pipeline failed"),
            }
            outcome
        }
        .instrument(self.span.clone())
        .await
    }

    async fn fetch_and_save(&self) -> Result<Colour, ColourServiceError> {
        let colour = self.fetcher.fetch().await?;
        self.persister.save(&colour).await?;
        Ok(colour)
    }
}
