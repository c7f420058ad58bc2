//! Domain-level error types for the colour pipeline.
//!
//! Each variant carries a fixed prefix naming the stage that failed and, where
//! a port was involved, the port error as its cause. The cause is part of the
//! message rather than an error source, so reports print it once. Nothing here
//! retries or recovers; the driver decides how to report.

use std::fmt;

use thiserror::Error;

use super::ports::{ColourRepositoryError, ColourSourceError};

/// Pipeline stage a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Retrieving the colour from the hexbot.
    Fetch,
    /// Validating and writing the colour to storage.
    Save,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fetch => "fetch",
            Self::Save => "save",
        })
    }
}

/// Errors produced by the fetcher, persister and pipeline.
///
/// # Examples
/// ```
/// use hexbot::domain::ColourServiceError;
/// use hexbot::domain::ports::ColourSourceError;
///
/// let err = ColourServiceError::from(ColourSourceError::transport("GET unsuccessful"));
/// assert_eq!(err.to_string(), "problem getting hex from hexbot: GET unsuccessful");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourServiceError {
    /// The colour source failed.
    #[error("problem getting hex from hexbot: {cause}")]
    Transport {
        /// Underlying source failure.
        cause: ColourSourceError,
    },
    /// An empty colour was handed to the persister.
    #[error("trying to save an empty colour string")]
    EmptyValue,
    /// The colour store failed.
    #[error("problem passing colour string to database layer: {cause}")]
    Storage {
        /// Underlying storage failure.
        cause: ColourRepositoryError,
    },
}

impl From<ColourSourceError> for ColourServiceError {
    fn from(cause: ColourSourceError) -> Self {
        Self::Transport { cause }
    }
}

impl From<ColourRepositoryError> for ColourServiceError {
    fn from(cause: ColourRepositoryError) -> Self {
        Self::Storage { cause }
    }
}

impl ColourServiceError {
    /// Stage at which the pipeline stopped.
    pub const fn stage(&self) -> PipelineStage {
        match self {
            Self::Transport { .. } => PipelineStage::Fetch,
            Self::EmptyValue | Self::Storage { .. } => PipelineStage::Save,
        }
    }
}
