//! Result area: loading text, error text, empty notice or the result grid.

use dioxus::prelude::*;
use common::display::results_heading;
use search_state::search_run::ResultsDisplay;

use crate::{
    components::search_components::search_result_item_card::SearchResultItemCard,
    data_definitions::search_context::SearchContext,
};

#[component]
pub fn SearchResultsView() -> Element {
    let results = use_context::<SearchContext>().results;
    let view = results.read();

    match view.display() {
        ResultsDisplay::Loading => rsx! {
            div {
                style: "text-align: center; padding: 32px 0; color: #6B7280;",
                "검색 중..."
            }
        },
        ResultsDisplay::Error(error) => rsx! {
            div {
                style: "text-align: center; padding: 32px 0; color: #EF4444;",
                "{error}"
            }
        },
        ResultsDisplay::Empty => rsx! {
            div {
                style: "text-align: center; padding: 32px 0; color: #6B7280;",
                "검색 결과가 없습니다."
            }
        },
        ResultsDisplay::Results(items) => {
            let heading = results_heading(items.len());
            let items = items.to_vec();
            rsx! {
                h2 {
                    style: "
                        font-size: 20px;
                        font-weight: 600;
                        margin-bottom: 16px;
                    ",
                    "{heading}"
                }
                div {
                    style: "
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                        gap: 16px;
                    ",
                    for item in items {
                        SearchResultItemCard { key: "{item.id}", item: item.clone() }
                    }
                }
            }
        }
    }
}
