//! Browser implementations of the storage and history seams.

pub mod browser_history;
pub mod browser_storage;

use std::cell::OnceCell;

use search_state::{HistoryBridge, SearchStateController};

use browser_history::BrowserHistory;
use browser_storage::BrowserStorage;

pub type AppHistoryBridge = HistoryBridge<BrowserHistory>;
pub type AppController = SearchStateController<BrowserStorage, BrowserHistory>;

thread_local! {
    static HISTORY_BRIDGE: OnceCell<AppHistoryBridge> = const { OnceCell::new() };
}

/// The page-wide history bridge. Created and installed on first use.
pub fn history_bridge() -> AppHistoryBridge {
    HISTORY_BRIDGE.with(|cell| {
        cell.get_or_init(|| {
            let bridge = HistoryBridge::new(BrowserHistory::default());
            bridge.install();
            bridge
        })
        .clone()
    })
}
