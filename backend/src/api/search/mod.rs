//! Search API route handlers and module exports.

use anyhow::Context;
use axum::{
    Json,
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{
    filter_set::FilterSet,
    search_const::{SEARCH_FAILED_MESSAGE, SEARCH_OK_MESSAGE},
    search_result::SearchResponse,
};
use tracing::info;

mod mock_data;
pub use mock_data::{generate_mock_items, sort_items};

fn _search(body: &[u8]) -> anyhow::Result<SearchResponse> {
    let filters: FilterSet = serde_json::from_slice(body).context("invalid filter payload")?;
    info!(
        "Searching: keyword={:?} category={} dateRange={} status={} sortBy={}",
        filters.keyword, filters.category, filters.date_range, filters.status, filters.sort_by
    );
    let items = generate_mock_items(&filters, &mut rand::rng(), chrono::Utc::now());
    info!("Generated {} items", items.len());
    Ok(SearchResponse::ok(items, filters, SEARCH_OK_MESSAGE))
}

pub async fn search(body: Bytes) -> Response {
    match _search(&body) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!("search: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(SearchResponse::failed(SEARCH_FAILED_MESSAGE))).into_response()
        }
    }
}
