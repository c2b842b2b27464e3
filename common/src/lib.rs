//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod filter_set;
pub mod search_result;
pub mod search_const;
pub mod search_options;
pub mod display;
