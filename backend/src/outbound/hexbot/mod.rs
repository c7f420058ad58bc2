//! Hexbot outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `ColourSource`
//! port.

mod http_source;

pub use http_source::{DEFAULT_HEXBOT_ENDPOINT, HexbotHttpSource};
