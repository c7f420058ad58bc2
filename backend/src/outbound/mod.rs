//! Outbound adapters implementing the domain ports.

pub mod hexbot;
pub mod persistence;
