use common::filter_set::{Category, FilterPatch, SortBy, Status};

use super::*;
use crate::storage::MemoryStorage;

fn sample_filters() -> FilterSet {
    FilterSet::default().merged(
        FilterPatch::default()
            .keyword("laptop")
            .category(Category::Electronics)
            .status(Status::Active),
    )
}

#[test]
fn load_without_entry_returns_defaults() {
    let store = FilterStore::new(MemoryStorage::new());
    assert_eq!(store.load(), FilterSet::default());
    assert!(!store.has_entry());
}

#[test]
fn save_then_load_returns_same_filters() {
    let store = FilterStore::new(MemoryStorage::new());
    let filters = sample_filters();
    store.save(&filters);
    assert!(store.has_entry());
    assert_eq!(store.load(), filters);
}

#[test]
fn saved_value_is_json_under_fixed_key() {
    let storage = MemoryStorage::new();
    let store = FilterStore::new(storage.clone());
    store.save(&FilterSet::default().merged(FilterPatch::default().sort_by(SortBy::Name)));
    let raw = storage.get_item("search-params").unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["sortBy"], "name");
    assert_eq!(value["dateRange"], "all");
}

#[test]
fn saving_defaults_removes_entry() {
    let storage = MemoryStorage::new();
    let store = FilterStore::new(storage.clone());
    store.save(&sample_filters());
    store.save(&FilterSet::default());
    assert!(storage.is_empty());
    assert_eq!(store.load(), FilterSet::default());
}

#[test]
fn corrupt_entry_is_treated_as_absent() {
    let storage = MemoryStorage::new();
    storage.set_item("search-params", "{not json").unwrap();
    let store = FilterStore::new(storage);
    assert_eq!(store.load(), FilterSet::default());
}

#[test]
fn entry_with_unknown_enum_value_is_treated_as_absent() {
    let storage = MemoryStorage::new();
    storage.set_item("search-params", r#"{"keyword":"x","category":"toys"}"#).unwrap();
    assert_eq!(FilterStore::new(storage).load(), FilterSet::default());
}

#[test]
fn clear_removes_entry_unconditionally() {
    let storage = MemoryStorage::new();
    let store = FilterStore::new(storage.clone());
    store.save(&sample_filters());
    store.clear();
    assert!(!store.has_entry());
    store.clear();
    assert!(storage.is_empty());
}
