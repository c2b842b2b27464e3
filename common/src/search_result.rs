use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter_set::FilterSet;


/// One generated result card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub id: u64,
    pub title: String,
    /// Raw category string; may not be one of the known filter values.
    pub category: String,
    pub status: String,
    /// Price in whole KRW.
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultData {
    pub items: Vec<ResultItem>,
    pub total: u64,
    pub filters: FilterSet,
}

/// Envelope returned by `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SearchResultData>,
    pub message: String,
}

impl SearchResponse {
    pub fn ok(items: Vec<ResultItem>, filters: FilterSet, message: impl Into<String>) -> Self {
        let total = items.len() as u64;
        Self {
            success: true,
            data: Some(SearchResultData { items, total, filters }),
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, data: None, message: message.into() }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
