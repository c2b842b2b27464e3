//! Search page state shared with the form, the result list and the debug overlay.

use common::filter_set::{FilterPatch, FilterSet};
use dioxus::prelude::*;
use search_state::{SearchOptions, SearchViewState};

#[derive(Debug, Clone, PartialEq, Copy)]
pub struct SearchContext {
    pub filters: ReadSignal<FilterSet>,
    pub results: ReadSignal<SearchViewState>,
    pub update_filters: Callback<FilterPatch>,
    pub run_search: Callback<SearchOptions>,
    pub reset: Callback<()>,
}
