//! Fetch a hex colour from the hexbot and persist it.
//!
//! The [`domain`] module holds the fetcher, persister and pipeline together
//! with the ports they depend on; [`outbound`] provides the reqwest and
//! Diesel adapters; [`config`] resolves runtime settings.

pub mod config;
pub mod domain;
pub mod outbound;
