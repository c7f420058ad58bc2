//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Ports describe how the domain expects to reach driven adapters (the hexbot
//! HTTP endpoint and the colour store). Each trait exposes a strongly typed
//! error so adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod colour_repository;
mod colour_source;

#[cfg(test)]
pub use colour_repository::MockColourRepository;
pub use colour_repository::{ColourRepository, ColourRepositoryError, FixtureColourRepository};
#[cfg(test)]
pub use colour_source::MockColourSource;
pub use colour_source::{ColourSource, ColourSourceError, FIXTURE_COLOUR, FixtureColourSource};
