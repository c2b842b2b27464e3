//! Bookkeeping for one search run: request encoding, response
//! interpretation and the results/loading/error state shown by the view.
//!
//! A run is split around its single await point so the view can keep its
//! state in whatever reactive container it uses:
//! [`begin_search`] → [`PendingSearch::execute`] → [`SearchViewState::apply`].
//! Every run takes a ticket; only the latest ticket's response is applied.

use std::future::Future;

use common::{
    filter_set::FilterSet,
    search_result::{ResultItem, SearchResponse},
};
use thiserror::Error;

use crate::{controller::SearchStateController, history::HistoryBackend, storage::KeyValueStorage};

pub const REQUEST_FAILED_MESSAGE: &str = "검색 요청이 실패했습니다";
pub const GENERIC_ERROR_MESSAGE: &str = "검색 중 오류가 발생했습니다";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search request returned status {0}")]
    Status(u16),
    #[error("search service reported failure: {0}")]
    Rejected(String),
    #[error("search request failed: {0}")]
    Transport(String),
    #[error("could not decode search response: {0}")]
    Decode(String),
    #[error("could not encode search request: {0}")]
    Encode(String),
}

impl SearchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::Status(_) | SearchError::Rejected(_) => REQUEST_FAILED_MESSAGE,
            SearchError::Transport(_) | SearchError::Decode(_) | SearchError::Encode(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}

/// Transport used to reach the search service.
pub trait SearchApi {
    fn search(&self, filters: &FilterSet) -> impl Future<Output = Result<Vec<ResultItem>, SearchError>>;
}

/// JSON body sent to `POST /search`.
pub fn request_body(filters: &FilterSet) -> Result<String, SearchError> {
    serde_json::to_string(filters).map_err(|e| SearchError::Encode(e.to_string()))
}

/// Turns an HTTP status and body into the result list.
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<ResultItem>, SearchError> {
    if !(200..300).contains(&status) {
        return Err(SearchError::Status(status));
    }
    let response: SearchResponse = serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;
    if !response.success {
        return Err(SearchError::Rejected(response.message));
    }
    match response.data {
        Some(data) => Ok(data.items),
        None => Err(SearchError::Decode("response has no data".to_string())),
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Push a history entry before searching. Set for genuine form submissions only.
    pub record_history: bool,
}

impl SearchOptions {
    pub fn submit() -> Self {
        Self { record_history: true }
    }

    pub fn replay() -> Self {
        Self { record_history: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub ticket: RequestTicket,
    pub filters: FilterSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSearch {
    pub ticket: RequestTicket,
    pub outcome: Result<Vec<ResultItem>, SearchError>,
}

impl PendingSearch {
    pub async fn execute<A: SearchApi>(self, api: &A) -> CompletedSearch {
        let outcome = api.search(&self.filters).await;
        CompletedSearch { ticket: self.ticket, outcome }
    }
}

/// Commits (when asked to) and opens a new run against the controller's current filters.
pub fn begin_search<S, H>(
    controller: &SearchStateController<S, H>,
    view: &mut SearchViewState,
    options: SearchOptions,
) -> PendingSearch
where
    S: KeyValueStorage + 'static,
    H: HistoryBackend + 'static,
{
    if options.record_history {
        controller.commit();
    }
    PendingSearch { ticket: view.begin(), filters: controller.get_state() }
}


/// What the result area should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsDisplay<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Results(&'a [ResultItem]),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchViewState {
    items: Vec<ResultItem>,
    loading: bool,
    error: Option<String>,
    issued: u64,
}

impl SearchViewState {
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        RequestTicket(self.issued)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Applies a finished run. Returns `false` when a newer run has started since.
    pub fn apply(&mut self, completed: CompletedSearch) -> bool {
        if !self.is_latest(completed.ticket) {
            tracing::debug!("Dropping stale search response {} (latest {})", completed.ticket.0, self.issued);
            return false;
        }
        self.loading = false;
        match completed.outcome {
            Ok(items) => {
                tracing::debug!("Search returned {} items", items.len());
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Search failed: {}", e);
                self.items.clear();
                self.error = Some(e.user_message().to_string());
            }
        }
        true
    }

    /// Drops results and abandons any run still in flight.
    pub fn clear(&mut self) {
        self.issued += 1;
        self.items.clear();
        self.error = None;
        self.loading = false;
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn display(&self) -> ResultsDisplay<'_> {
        if self.loading {
            ResultsDisplay::Loading
        } else if let Some(error) = &self.error {
            ResultsDisplay::Error(error)
        } else if self.items.is_empty() {
            ResultsDisplay::Empty
        } else {
            ResultsDisplay::Results(&self.items)
        }
    }
}

#[cfg(test)]
#[path = "search_run_test.rs"]
mod tests;
