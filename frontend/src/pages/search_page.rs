use dioxus::{logger::tracing, prelude::*};

use common::filter_set::FilterPatch;
use search_state::{
    FilterStore, SearchOptions, SearchViewState,
    search_run::begin_search,
};
use crate::{
    api::search_api::HttpSearchApi,
    components::{
        error_boundary::ComponentErrorBoundary,
        history_debugger::HistoryDebugger,
        search_components::{search_form::SearchForm, search_results_view::SearchResultsView},
    },
    data_definitions::search_context::SearchContext,
    platform::{AppController, AppHistoryBridge, browser_storage::BrowserStorage},
};


/// Search page
#[component]
pub fn SearchPage() -> Element {
    let bridge = use_context::<AppHistoryBridge>();
    let controller = use_hook(move || AppController::new(FilterStore::new(BrowserStorage), bridge));
    let api = use_hook(HttpSearchApi::from_build_env);

    let filters = use_signal(|| controller.get_state());
    let mut results = use_signal(SearchViewState::default);

    // mirror every controller change, including back/forward restores, into the signal
    use_hook({
        let controller = controller.clone();
        move || {
            controller.on_change(move |state| {
                let mut filters = filters;
                filters.set(state.clone());
            });
        }
    });

    let update_filters = use_callback({
        let controller = controller.clone();
        move |patch: FilterPatch| controller.merge_filters(patch)
    });

    let run_search = use_callback({
        let controller = controller.clone();
        move |options: SearchOptions| {
            let pending = begin_search(&controller, &mut results.write(), options);
            let api = api.clone();
            spawn(async move {
                let completed = pending.execute(&api).await;
                results.write().apply(completed);
            });
        }
    });

    let reset = use_callback({
        let controller = controller.clone();
        move |_: ()| {
            controller.reset();
            results.write().clear();
        }
    });

    use_context_provider(move || SearchContext {
        filters: filters.into(),
        results: results.into(),
        update_filters,
        run_search,
        reset,
    });

    // after the first render: take over the current history entry and replay
    // the last stored search
    use_hook({
        let controller = controller.clone();
        move || {
            spawn(async move {
                controller.activate();
                if controller.restored_from_storage() {
                    tracing::info!("Replaying stored search");
                    run_search.call(SearchOptions::replay());
                }
            });
        }
    });
    use_drop({
        let controller = controller.clone();
        move || controller.deactivate()
    });

    rsx! {
        Title { "상세 검색" }
        div {
            id: "x-search-page-root",
            style: "
                padding: 24px;
                box-sizing: border-box;
            ",
            h1 {
                style: "
                    font-size: 24px;
                    font-weight: 700;
                    margin-bottom: 24px;
                ",
                "상세 검색"
            }
            SearchForm {}
            div {
                id: "x-search-results",
                style: "margin-top: 32px;",
                ComponentErrorBoundary {
                    SearchResultsView {}
                }
            }
            HistoryDebugger {}
        }
    }
}
