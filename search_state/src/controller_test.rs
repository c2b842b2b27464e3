use std::{cell::RefCell, rc::Rc};

use common::filter_set::{Category, DateRange, SortBy, Status};

use super::*;
use crate::{history::MemoryHistory, storage::MemoryStorage};

struct Fixture {
    storage: MemoryStorage,
    history: MemoryHistory,
    controller: SearchStateController<MemoryStorage, MemoryHistory>,
}

fn fixture_with_storage(storage: MemoryStorage) -> Fixture {
    let history = MemoryHistory::new("/");
    let bridge = HistoryBridge::new(history.clone());
    bridge.install();
    let controller = SearchStateController::new(FilterStore::new(storage.clone()), bridge);
    Fixture { storage, history, controller }
}

fn fixture() -> Fixture {
    fixture_with_storage(MemoryStorage::new())
}

fn laptop_filters() -> FilterSet {
    FilterSet {
        keyword: "laptop".into(),
        category: Category::Electronics,
        date_range: DateRange::All,
        status: Status::Active,
        sort_by: SortBy::Latest,
    }
}

fn stored(storage: &MemoryStorage) -> Option<FilterSet> {
    storage.get_item("search-params").map(|raw| serde_json::from_str(&raw).unwrap())
}

#[test]
fn starts_from_defaults_without_stored_filters() {
    let f = fixture();
    assert_eq!(f.controller.get_state(), FilterSet::default());
    assert_eq!(f.controller.phase(), SearchPhase::Default);
    assert!(!f.controller.restored_from_storage());
}

#[test]
fn starts_from_stored_filters() {
    let storage = MemoryStorage::new();
    FilterStore::new(storage.clone()).save(&laptop_filters());
    let f = fixture_with_storage(storage);
    assert_eq!(f.controller.get_state(), laptop_filters());
    assert_eq!(f.controller.phase(), SearchPhase::Filtered);
    assert!(f.controller.restored_from_storage());
}

#[test]
fn merge_changes_only_given_field_and_writes_through() {
    let f = fixture();
    f.controller.merge_filters(FilterPatch::default().keyword("phone"));

    let expected = FilterSet { keyword: "phone".into(), ..FilterSet::default() };
    assert_eq!(f.controller.get_state(), expected);
    assert_eq!(stored(&f.storage), Some(expected));
    assert_eq!(f.controller.phase(), SearchPhase::Filtered);
}

#[test]
fn merge_with_every_field_is_still_a_merge() {
    let f = fixture();
    f.controller.replace_filters(laptop_filters());
    let patch = FilterPatch::default()
        .keyword("laptop")
        .category(Category::Books)
        .date_range(DateRange::All)
        .status(Status::Active)
        .sort_by(SortBy::Latest);
    f.controller.update_filters(FilterUpdate::Merge(patch));
    assert_eq!(f.controller.get_state().category, Category::Books);
}

#[test]
fn replace_takes_full_set() {
    let f = fixture();
    f.controller.merge_filters(FilterPatch::default().sort_by(SortBy::Name));
    f.controller.update_filters(FilterUpdate::Replace(laptop_filters()));
    assert_eq!(f.controller.get_state(), laptop_filters());
}

#[test]
fn update_back_to_defaults_removes_stored_entry() {
    let f = fixture();
    f.controller.merge_filters(FilterPatch::default().status(Status::Pending));
    assert!(stored(&f.storage).is_some());
    f.controller.merge_filters(FilterPatch::default().status(Status::All));
    assert!(f.storage.is_empty());
    assert_eq!(f.controller.phase(), SearchPhase::Default);
}

#[test]
fn activate_replaces_entry_instead_of_pushing() {
    let f = fixture();
    assert!(f.controller.activate());
    assert_eq!(f.history.length(), 1);
    assert_eq!(f.history.state(), None);
    assert!(!f.controller.activate());
    assert_eq!(f.controller.bridge().listener_count(), 1);
}

#[test]
fn activate_with_stored_filters_puts_them_in_current_entry() {
    let storage = MemoryStorage::new();
    FilterStore::new(storage.clone()).save(&laptop_filters());
    let f = fixture_with_storage(storage);
    f.controller.activate();
    assert_eq!(f.history.length(), 1);
    assert_eq!(f.history.state(), Some(laptop_filters()));
}

#[test]
fn commit_pushes_null_for_defaults_and_full_state_otherwise() {
    let f = fixture();
    f.controller.activate();
    f.controller.commit();
    assert_eq!(f.history.length(), 2);
    assert_eq!(f.history.state(), None);

    f.controller.replace_filters(laptop_filters());
    f.controller.commit();
    assert_eq!(f.history.length(), 3);
    assert_eq!(f.history.state(), Some(laptop_filters()));
    assert_eq!(f.controller.get_state(), laptop_filters());
}

#[test]
fn back_navigation_restores_committed_filters() {
    let f = fixture();
    f.controller.activate();
    f.controller.replace_filters(laptop_filters());
    f.controller.commit();
    f.controller.merge_filters(FilterPatch::default().keyword("phone"));
    f.controller.commit();

    assert!(f.history.back());
    assert_eq!(f.controller.get_state(), laptop_filters());
    assert_eq!(stored(&f.storage), Some(laptop_filters()));

    assert!(f.history.back());
    assert_eq!(f.controller.get_state(), FilterSet::default());
    assert!(f.storage.is_empty());

    assert!(f.history.forward());
    assert_eq!(f.controller.get_state(), laptop_filters());
}

#[test]
fn navigation_is_ignored_after_deactivate() {
    let f = fixture();
    f.controller.activate();
    f.controller.replace_filters(laptop_filters());
    f.controller.commit();
    f.controller.deactivate();
    assert!(!f.controller.is_active());

    f.history.back();
    assert_eq!(f.controller.get_state(), laptop_filters());
}

#[test]
fn reset_clears_state_storage_and_pushes_entry_at_current_path() {
    let history = MemoryHistory::new("/search");
    let bridge = HistoryBridge::new(history.clone());
    bridge.install();
    let storage = MemoryStorage::new();
    let controller = SearchStateController::new(FilterStore::new(storage.clone()), bridge);
    controller.activate();
    controller.replace_filters(laptop_filters());
    controller.commit();

    controller.reset();

    assert_eq!(controller.get_state(), FilterSet::default());
    assert!(storage.is_empty());
    assert_eq!(history.length(), 3);
    assert_eq!(history.state(), None);
    assert_eq!(history.current_path(), "/search");
}

#[test]
fn reset_from_default_state_still_yields_defaults() {
    let f = fixture();
    f.controller.reset();
    assert_eq!(f.controller.get_state(), FilterSet::default());
    assert!(f.storage.is_empty());
}

#[test]
fn change_listeners_see_edits_and_navigation() {
    let f = fixture();
    f.controller.activate();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    f.controller.on_change(move |state| sink.borrow_mut().push(state.keyword.clone()));

    f.controller.merge_filters(FilterPatch::default().keyword("phone"));
    f.controller.commit();
    f.history.back();

    assert_eq!(*seen.borrow(), vec!["phone".to_string(), String::new()]);
}
