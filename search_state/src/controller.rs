//! Search state controller.
//!
//! Holds the current filter set and is the only writer of it into the
//! persistent store and the navigation history. Two logical phases exist:
//! `Default` (the filter set equals the defaults) and `Filtered`.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use common::filter_set::{FilterPatch, FilterSet};

use crate::{
    filter_store::FilterStore,
    history::{HistoryBackend, HistoryBridge, HistoryEvent, ListenerId},
    storage::KeyValueStorage,
};

/// How a filter update combines with the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    /// Overwrite only the fields present in the patch.
    Merge(FilterPatch),
    /// Take the given set as-is.
    Replace(FilterSet),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Default,
    Filtered,
}

type ChangeListener = Rc<dyn Fn(&FilterSet)>;

struct ControllerInner<S, H> {
    state: RefCell<FilterSet>,
    store: FilterStore<S>,
    bridge: HistoryBridge<H>,
    restored_from_storage: bool,
    subscription: Cell<Option<ListenerId>>,
    change_listeners: RefCell<Vec<ChangeListener>>,
}

impl<S: KeyValueStorage, H: HistoryBackend + 'static> ControllerInner<S, H> {
    fn set_state(&self, next: FilterSet) {
        self.store.save(&next);
        *self.state.borrow_mut() = next.clone();
        self.notify(&next);
    }

    fn reset_state(&self) {
        self.store.clear();
        *self.state.borrow_mut() = FilterSet::default();
        self.notify(&FilterSet::default());
    }

    fn notify(&self, state: &FilterSet) {
        let listeners: Vec<ChangeListener> = self.change_listeners.borrow().iter().cloned().collect();
        for listener in listeners {
            listener(state);
        }
    }

    fn history_payload(&self) -> Option<FilterSet> {
        let state = self.state.borrow();
        if state.is_default() { None } else { Some(state.clone()) }
    }

    fn on_history_event(&self, event: &HistoryEvent) {
        let HistoryEvent::Navigated { payload } = event else {
            return;
        };
        match payload {
            Some(filters) => {
                tracing::debug!("Restoring filters from history entry: {:?}", filters);
                self.set_state(filters.clone());
            }
            None => {
                tracing::debug!("History entry has no filters, resetting");
                self.reset_state();
            }
        }
    }
}

pub struct SearchStateController<S, H> {
    inner: Rc<ControllerInner<S, H>>,
}

impl<S, H> Clone for SearchStateController<S, H> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<S: KeyValueStorage + 'static, H: HistoryBackend + 'static> SearchStateController<S, H> {
    /// Creates the controller with the filters found in `store` (or the defaults).
    pub fn new(store: FilterStore<S>, bridge: HistoryBridge<H>) -> Self {
        let state = store.load();
        let restored_from_storage = !state.is_default();
        Self {
            inner: Rc::new(ControllerInner {
                state: RefCell::new(state),
                store,
                bridge,
                restored_from_storage,
                subscription: Cell::new(None),
                change_listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Replaces the current history entry with the current state and starts
    /// following back/forward navigation. Returns `false` if already active.
    pub fn activate(&self) -> bool {
        if self.inner.subscription.get().is_some() {
            return false;
        }
        let payload = self.inner.history_payload();
        self.inner.bridge.replace_state(payload.as_ref(), None);

        let weak = Rc::downgrade(&self.inner);
        let id = self.inner.bridge.subscribe(move |event| {
            if let Some(inner) = weak.upgrade() {
                inner.on_history_event(event);
            }
        });
        self.inner.subscription.set(Some(id));
        true
    }

    pub fn deactivate(&self) {
        if let Some(id) = self.inner.subscription.take() {
            self.inner.bridge.unsubscribe(id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.subscription.get().is_some()
    }

    pub fn get_state(&self) -> FilterSet {
        self.inner.state.borrow().clone()
    }

    pub fn phase(&self) -> SearchPhase {
        if self.inner.state.borrow().is_default() { SearchPhase::Default } else { SearchPhase::Filtered }
    }

    /// Whether a non-default filter set was loaded from storage at startup.
    pub fn restored_from_storage(&self) -> bool {
        self.inner.restored_from_storage
    }

    pub fn update_filters(&self, update: FilterUpdate) {
        let next = match update {
            FilterUpdate::Merge(patch) => self.get_state().merged(patch),
            FilterUpdate::Replace(filters) => filters,
        };
        self.inner.set_state(next);
    }

    pub fn merge_filters(&self, patch: FilterPatch) {
        self.update_filters(FilterUpdate::Merge(patch));
    }

    pub fn replace_filters(&self, filters: FilterSet) {
        self.update_filters(FilterUpdate::Replace(filters));
    }

    /// Records the current state as a new history step.
    pub fn commit(&self) {
        let payload = self.inner.history_payload();
        tracing::debug!("Committing search to history (filtered: {})", payload.is_some());
        self.inner.bridge.push_state(payload.as_ref(), None);
    }

    /// Back to defaults: clears storage and pushes an empty entry at the current path.
    pub fn reset(&self) {
        self.inner.reset_state();
        let path = self.inner.bridge.current_path();
        self.inner.bridge.push_state(None, Some(&path));
    }

    /// Registers a callback run after every state change, including those
    /// caused by history navigation.
    pub fn on_change(&self, listener: impl Fn(&FilterSet) + 'static) {
        self.inner.change_listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn bridge(&self) -> &HistoryBridge<H> {
        &self.inner.bridge
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
