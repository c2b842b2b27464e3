//! HTTP client for the mock search service.

use common::{
    filter_set::FilterSet,
    search_const::{DEFAULT_SEARCH_API_URL, SEARCH_PATH},
    search_result::ResultItem,
};
use search_state::{
    SearchApi, SearchError,
    search_run::{interpret_response, request_body},
};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpSearchApi {
    endpoint: String,
}

impl HttpSearchApi {
    pub fn new(base_url: &str) -> Self {
        Self { endpoint: format!("{}{}", base_url.trim_end_matches('/'), SEARCH_PATH) }
    }

    /// Uses `SEARCH_API_URL` from the build environment, if set.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("SEARCH_API_URL").unwrap_or(DEFAULT_SEARCH_API_URL))
    }
}

impl SearchApi for HttpSearchApi {
    async fn search(&self, filters: &FilterSet) -> Result<Vec<ResultItem>, SearchError> {
        let body = request_body(filters)?;
        let response = reqwest::Client::new()
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| SearchError::Transport(e.to_string()))?;
        interpret_response(status, &text)
    }
}
