//! Random result generation.

use chrono::{DateTime, Duration, Utc};
use common::{
    filter_set::{Category, FilterSet, SortBy, Status},
    search_result::ResultItem,
};
use rand::Rng;

pub const MIN_ITEMS: usize = 10;
pub const MAX_ITEMS: usize = 59;
pub const MIN_PRICE: i64 = 10_000;
pub const MAX_PRICE: i64 = 1_009_999;
const YEAR_MS: i64 = 365 * 24 * 60 * 60 * 1000;

const CONCRETE_CATEGORIES: [Category; 3] = [Category::Electronics, Category::Clothing, Category::Books];
const CONCRETE_STATUSES: [Status; 3] = [Status::Active, Status::Inactive, Status::Pending];

/// Fabricates 10..=59 items matching `filters`, created within the year before `now`.
pub fn generate_mock_items<R: Rng + ?Sized>(filters: &FilterSet, rng: &mut R, now: DateTime<Utc>) -> Vec<ResultItem> {
    let total = rng.random_range(MIN_ITEMS..=MAX_ITEMS);
    let keyword = filters.keyword.as_str();

    let mut items = (1..=total as u64)
        .map(|n| {
            let category = match filters.category {
                Category::All => CONCRETE_CATEGORIES[rng.random_range(0..CONCRETE_CATEGORIES.len())],
                category => category,
            };
            let status = match filters.status {
                Status::All => CONCRETE_STATUSES[rng.random_range(0..CONCRETE_STATUSES.len())],
                status => status,
            };
            let title = if keyword.is_empty() { format!("상품 {n}") } else { format!("상품 {n} - {keyword} 관련") };
            let subject = if keyword.is_empty() { "일반" } else { keyword };
            ResultItem {
                id: n,
                title,
                category: category.as_str().to_string(),
                status: status.as_str().to_string(),
                price: rng.random_range(MIN_PRICE..=MAX_PRICE),
                created_at: now - Duration::milliseconds(rng.random_range(0..YEAR_MS)),
                description: format!("이것은 상품 {n}에 대한 설명입니다. {subject} 제품입니다."),
            }
        })
        .collect::<Vec<_>>();

    sort_items(&mut items, filters.sort_by);
    items
}

/// `Latest` newest first, `Oldest` oldest first, `Name` by title ignoring case.
pub fn sort_items(items: &mut [ResultItem], sort_by: SortBy) {
    match sort_by {
        SortBy::Latest => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Oldest => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortBy::Name => items.sort_by(|a, b| {
            a.title.to_lowercase().cmp(&b.title.to_lowercase()).then_with(|| a.title.cmp(&b.title))
        }),
    }
}

#[cfg(test)]
#[path = "mock_data_test.rs"]
mod tests;
