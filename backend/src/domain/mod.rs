//! Domain types and services for colour acquisition.
//!
//! Purpose: fetch a colour through the [`ports::ColourSource`] port and
//! persist it through the [`ports::ColourRepository`] port. Adapters live in
//! `crate::outbound`; nothing in this module knows about HTTP or SQL.
//!
//! Public surface:
//! - `Colour` — opaque colour value.
//! - `ColourFetcher`, `ColourPersister`, `ColourPipeline` — the two stages
//!   and their composition.
//! - `ColourServiceError`, `PipelineStage` — stage-prefixed failures.

pub mod ports;

mod colour;
mod colour_fetcher;
mod colour_persister;
mod colour_pipeline;
mod error;

pub use self::colour::Colour;
pub use self::colour_fetcher::ColourFetcher;
pub use self::colour_persister::ColourPersister;
pub use self::colour_pipeline::ColourPipeline;
pub use self::error::{ColourServiceError, PipelineStage};
