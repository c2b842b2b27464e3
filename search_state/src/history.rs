//! History bridge: makes programmatic history mutations observable.
//!
//! Browsers only report user-driven back/forward navigation (`popstate`).
//! The bridge owns the history backend, forwards push/replace calls to it and
//! then notifies subscribers, and passes native back/forward through as
//! [`HistoryEvent::Navigated`]. It is created once at startup and handed to
//! every consumer; [`HistoryBridge::install`] is guarded so the native
//! listener is registered at most once.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use common::filter_set::FilterSet;

/// Callback run by a backend on native back/forward navigation.
pub type NavigationCallback = Box<dyn Fn(Option<FilterSet>)>;

/// The platform's navigation history.
///
/// Payloads are `None` for entries without (readable) search state.
pub trait HistoryBackend {
    fn push_state(&self, payload: Option<&FilterSet>, url: Option<&str>);
    fn replace_state(&self, payload: Option<&FilterSet>, url: Option<&str>);
    fn state(&self) -> Option<FilterSet>;
    fn length(&self) -> usize;
    fn current_path(&self) -> String;
    fn listen_navigation(&self, callback: NavigationCallback);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Push,
    Replace,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Push => "pushstate",
            MutationKind::Replace => "replacestate",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEvent {
    /// A push or replace went through the bridge.
    Changed(MutationKind),
    /// The user moved back or forward.
    Navigated { payload: Option<FilterSet> },
}

impl HistoryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            HistoryEvent::Changed(kind) => kind.as_str(),
            HistoryEvent::Navigated { .. } => "popstate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    pub length: usize,
    pub state: Option<FilterSet>,
    pub last_event: Option<&'static str>,
}

type Listener = Rc<dyn Fn(&HistoryEvent)>;

struct BridgeInner<H> {
    backend: H,
    installed: Cell<bool>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    last_event: Cell<Option<&'static str>>,
}

impl<H> BridgeInner<H> {
    fn emit(&self, event: HistoryEvent) {
        self.last_event.set(Some(event.name()));
        // listeners may subscribe or unsubscribe while being notified
        let listeners: Vec<Listener> = self.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(&event);
        }
    }
}

pub struct HistoryBridge<H> {
    inner: Rc<BridgeInner<H>>,
}

impl<H> Clone for HistoryBridge<H> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<H: HistoryBackend + 'static> HistoryBridge<H> {
    pub fn new(backend: H) -> Self {
        Self {
            inner: Rc::new(BridgeInner {
                backend,
                installed: Cell::new(false),
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
                last_event: Cell::new(None),
            }),
        }
    }

    /// Starts emitting events. Returns `false` if the bridge was already installed.
    pub fn install(&self) -> bool {
        if self.inner.installed.replace(true) {
            return false;
        }
        let weak: Weak<BridgeInner<H>> = Rc::downgrade(&self.inner);
        self.inner.backend.listen_navigation(Box::new(move |payload| {
            if let Some(inner) = weak.upgrade() {
                inner.emit(HistoryEvent::Navigated { payload });
            }
        }));
        tracing::debug!("History bridge installed");
        true
    }

    pub fn is_installed(&self) -> bool {
        self.inner.installed.get()
    }

    pub fn push_state(&self, payload: Option<&FilterSet>, url: Option<&str>) {
        self.inner.backend.push_state(payload, url);
        if self.is_installed() {
            self.inner.emit(HistoryEvent::Changed(MutationKind::Push));
        }
    }

    pub fn replace_state(&self, payload: Option<&FilterSet>, url: Option<&str>) {
        self.inner.backend.replace_state(payload, url);
        if self.is_installed() {
            self.inner.emit(HistoryEvent::Changed(MutationKind::Replace));
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&HistoryEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn current_path(&self) -> String {
        self.inner.backend.current_path()
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            length: self.inner.backend.length(),
            state: self.inner.backend.state(),
            last_event: self.inner.last_event.get(),
        }
    }

    pub fn backend(&self) -> &H {
        &self.inner.backend
    }
}


#[derive(Debug, Clone, PartialEq)]
struct MemoryEntry {
    payload: Option<FilterSet>,
    path: String,
}

#[derive(Debug)]
struct MemoryHistoryState {
    entries: Vec<MemoryEntry>,
    index: usize,
}

/// Session history kept in memory, with browser push/replace/back/forward
/// semantics. Clones share the same history.
#[derive(Clone)]
pub struct MemoryHistory {
    state: Rc<RefCell<MemoryHistoryState>>,
    callbacks: Rc<RefCell<Vec<Rc<dyn Fn(Option<FilterSet>)>>>>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryHistoryState {
                entries: vec![MemoryEntry { payload: None, path: initial_path.into() }],
                index: 0,
            })),
            callbacks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn back(&self) -> bool {
        self.go(-1)
    }

    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Moves `delta` entries and fires the navigation callbacks. Returns
    /// `false` without firing when the target is out of range.
    pub fn go(&self, delta: isize) -> bool {
        let payload = {
            let mut state = self.state.borrow_mut();
            let target = state.index as isize + delta;
            if delta == 0 || target < 0 || target >= state.entries.len() as isize {
                return false;
            }
            state.index = target as usize;
            state.entries[state.index].payload.clone()
        };
        let callbacks: Vec<_> = self.callbacks.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback(payload.clone());
        }
        true
    }

    pub fn index(&self) -> usize {
        self.state.borrow().index
    }

    pub fn navigation_listener_count(&self) -> usize {
        self.callbacks.borrow().len()
    }
}

impl HistoryBackend for MemoryHistory {
    fn push_state(&self, payload: Option<&FilterSet>, url: Option<&str>) {
        let mut state = self.state.borrow_mut();
        let path = url.map(str::to_string).unwrap_or_else(|| state.entries[state.index].path.clone());
        let next = state.index + 1;
        state.entries.truncate(next);
        state.entries.push(MemoryEntry { payload: payload.cloned(), path });
        state.index = next;
    }

    fn replace_state(&self, payload: Option<&FilterSet>, url: Option<&str>) {
        let mut state = self.state.borrow_mut();
        let index = state.index;
        let entry = &mut state.entries[index];
        entry.payload = payload.cloned();
        if let Some(url) = url {
            entry.path = url.to_string();
        }
    }

    fn state(&self) -> Option<FilterSet> {
        let state = self.state.borrow();
        state.entries[state.index].payload.clone()
    }

    fn length(&self) -> usize {
        self.state.borrow().entries.len()
    }

    fn current_path(&self) -> String {
        let state = self.state.borrow();
        state.entries[state.index].path.clone()
    }

    fn listen_navigation(&self, callback: NavigationCallback) {
        self.callbacks.borrow_mut().push(Rc::from(callback));
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
