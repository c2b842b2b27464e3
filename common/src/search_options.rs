//! Korean display labels for the filter select boxes and result cards.

use crate::filter_set::{Category, DateRange, SortBy, Status};


impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "전체",
            Category::Electronics => "전자기기",
            Category::Clothing => "의류",
            Category::Books => "도서",
        }
    }
}

impl DateRange {
    pub fn label(&self) -> &'static str {
        match self {
            DateRange::All => "전체 기간",
            DateRange::Today => "오늘",
            DateRange::Week => "이번 주",
            DateRange::Month => "이번 달",
            DateRange::Year => "올해",
        }
    }
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::All => "전체 상태",
            Status::Active => "활성",
            Status::Inactive => "비활성",
            Status::Pending => "대기중",
        }
    }
}

impl SortBy {
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Latest => "최신순",
            SortBy::Oldest => "오래된순",
            SortBy::Name => "이름순",
        }
    }
}

/// Label for a raw category string from a result item, falling back to the raw value.
pub fn category_label(raw: &str) -> String {
    raw.parse::<Category>().map(|c| c.label().to_string()).unwrap_or_else(|_| raw.to_string())
}

/// Label for a raw status string from a result item, falling back to the raw value.
pub fn status_label(raw: &str) -> String {
    raw.parse::<Status>().map(|s| s.label().to_string()).unwrap_or_else(|_| raw.to_string())
}
