//! Mock search service: fabricates result items for a filter set.

pub mod api;
pub mod config;
pub mod server;
