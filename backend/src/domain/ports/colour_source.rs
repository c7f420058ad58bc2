//! Driven port for retrieving a colour from the hexbot.
//!
//! The port exposes a single call shape: fetch one colour string. Transport
//! details such as status codes, headers and body streaming stay inside the
//! adapter.

use async_trait::async_trait;

use super::define_port_error;

/// Colour returned by [`FixtureColourSource`].
pub const FIXTURE_COLOUR: &str = "#228B22";

define_port_error! {
    /// Errors surfaced while calling the colour source.
    pub enum ColourSourceError {
        /// Network transport failed before a usable response arrived.
        Transport { message: String } =>
            "{message}",
        /// The request or the caller's deadline timed out.
        Timeout { message: String } =>
            "request timed out: {message}",
        /// The endpoint answered with a non-success status.
        Status { status: u16, message: String } =>
            "status {status}: {message}",
        /// The response body could not be read, or was not UTF-8 text.
        Decode { message: String } =>
            "problem reading body of http response from hexbot: {message}",
    }
}

/// Port for fetching a single colour value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ColourSource: Send + Sync {
    /// Fetch one colour value, verbatim.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use hexbot::domain::ports::{ColourSource, FixtureColourSource};
    ///
    /// let colour = FixtureColourSource.get_colour().await?;
    /// assert_eq!(colour, "#228B22");
    /// # Ok::<(), hexbot::domain::ports::ColourSourceError>(())
    /// ```
    async fn get_colour(&self) -> Result<String, ColourSourceError>;
}

/// Fixture implementation returning [`FIXTURE_COLOUR`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureColourSource;

#[async_trait]
impl ColourSource for FixtureColourSource {
    async fn get_colour(&self) -> Result<String, ColourSourceError> {
        Ok(FIXTURE_COLOUR.to_owned())
    }
}
