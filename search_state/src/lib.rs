//! Search state synchronization: keeps the in-memory filter set, persistent
//! storage and navigation history consistent with each other.
//!
//! Everything here is platform neutral. The browser adapters for
//! [`storage::KeyValueStorage`] and [`history::HistoryBackend`] live in the
//! frontend crate.

pub mod storage;
pub mod filter_store;
pub mod history;
pub mod controller;
pub mod search_run;

pub use controller::{FilterUpdate, SearchPhase, SearchStateController};
pub use filter_store::FilterStore;
pub use history::{HistoryBackend, HistoryBridge, HistoryEvent, MutationKind};
pub use search_run::{SearchApi, SearchError, SearchOptions, SearchViewState};
pub use storage::KeyValueStorage;
