pub mod error_boundary;
pub mod history_debugger;
pub mod search_components;
