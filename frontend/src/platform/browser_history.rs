//! `window.history` plus the `popstate` listener.

use std::cell::RefCell;

use common::filter_set::FilterSet;
use dioxus::logger::tracing;
use search_state::{HistoryBackend, history::NavigationCallback};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[derive(Default)]
pub struct BrowserHistory {
    // keeps the listener alive for the page lifetime
    popstate: RefCell<Option<Closure<dyn FnMut(web_sys::PopStateEvent)>>>,
}

fn history() -> Option<web_sys::History> {
    web_sys::window()?.history().ok()
}

fn to_js(payload: Option<&FilterSet>) -> JsValue {
    let Some(filters) = payload else {
        return JsValue::NULL;
    };
    match serde_wasm_bindgen::to_value(filters) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Failed to convert filters for history: {}", e);
            JsValue::NULL
        }
    }
}

fn from_js(value: JsValue) -> Option<FilterSet> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<FilterSet>(value) {
        Ok(filters) => Some(filters),
        Err(e) => {
            tracing::warn!("Ignoring unreadable history state: {}", e);
            None
        }
    }
}

impl HistoryBackend for BrowserHistory {
    fn push_state(&self, payload: Option<&FilterSet>, url: Option<&str>) {
        let Some(history) = history() else { return };
        if let Err(e) = history.push_state_with_url(&to_js(payload), "", url) {
            tracing::error!("history.pushState failed: {:?}", e);
        }
    }

    fn replace_state(&self, payload: Option<&FilterSet>, url: Option<&str>) {
        let Some(history) = history() else { return };
        if let Err(e) = history.replace_state_with_url(&to_js(payload), "", url) {
            tracing::error!("history.replaceState failed: {:?}", e);
        }
    }

    fn state(&self) -> Option<FilterSet> {
        from_js(history()?.state().ok()?)
    }

    fn length(&self) -> usize {
        history().and_then(|h| h.length().ok()).unwrap_or(0) as usize
    }

    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn listen_navigation(&self, callback: NavigationCallback) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |event: web_sys::PopStateEvent| {
            callback(from_js(event.state()));
        });
        if let Err(e) = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref()) {
            tracing::error!("Failed to listen for popstate: {:?}", e);
            return;
        }
        self.popstate.replace(Some(closure));
    }
}
