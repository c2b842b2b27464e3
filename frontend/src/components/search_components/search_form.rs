//! Filter form: keyword box, search/reset buttons and the four select boxes.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdRefresh}};
use common::filter_set::{Category, DateRange, FilterField, FilterPatch, SortBy, Status};
use search_state::SearchOptions;

use crate::data_definitions::search_context::SearchContext;


const CONTROL_STYLE: &str = "
    padding: 8px 16px;
    border: 1px solid #D1D5DB;
    border-radius: 8px;
    font-size: 16px;
    outline: none;
";

#[component]
pub fn SearchForm() -> Element {
    let ctx = use_context::<SearchContext>();
    let filters = ctx.filters;

    let category_options = Category::ALL.iter().map(|c| (c.as_str(), c.label())).collect::<Vec<_>>();
    let date_range_options = DateRange::ALL.iter().map(|d| (d.as_str(), d.label())).collect::<Vec<_>>();
    let status_options = Status::ALL.iter().map(|s| (s.as_str(), s.label())).collect::<Vec<_>>();
    let sort_options = SortBy::ALL.iter().map(|s| (s.as_str(), s.label())).collect::<Vec<_>>();

    rsx! {
        form {
            id: "x-search-form",
            style: "display: flex; flex-direction: column; gap: 16px;",
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                ctx.run_search.call(SearchOptions::submit());
            },

            div {
                style: "display: flex; flex-direction: row; gap: 16px;",
                input {
                    r#type: "text",
                    placeholder: "검색어를 입력하세요",
                    style: "flex: 1; {CONTROL_STYLE}",
                    value: "{filters.read().keyword}",
                    oninput: move |e: Event<FormData>| ctx.update_filters.call(FilterPatch::default().keyword(e.value())),
                }
                button {
                    r#type: "submit",
                    class: "search-button",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        padding: 8px 24px;
                        border: none;
                        border-radius: 8px;
                        background-color: #3B82F6;
                        color: white;
                        cursor: pointer;
                    ",
                    Icon { icon: MdSearch, style: "width: 18px; height: 18px;" }
                    "검색"
                }
                button {
                    r#type: "button",
                    class: "search-button",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        padding: 8px 24px;
                        border: none;
                        border-radius: 8px;
                        background-color: #E5E7EB;
                        color: #374151;
                        cursor: pointer;
                    ",
                    onclick: move |_| ctx.reset.call(()),
                    Icon { icon: MdRefresh, style: "width: 18px; height: 18px;" }
                    "초기화"
                }
            }

            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 16px;
                ",
                FilterSelect {
                    field: FilterField::Category,
                    value: filters.read().category.as_str(),
                    options: category_options,
                }
                FilterSelect {
                    field: FilterField::DateRange,
                    value: filters.read().date_range.as_str(),
                    options: date_range_options,
                }
                FilterSelect {
                    field: FilterField::Status,
                    value: filters.read().status.as_str(),
                    options: status_options,
                }
                FilterSelect {
                    field: FilterField::SortBy,
                    value: filters.read().sort_by.as_str(),
                    options: sort_options,
                }
            }
        }
    }
}

/// One select box. The raw option value is parsed back into a patch for `field`.
#[component]
fn FilterSelect(
    field: FilterField,
    value: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> Element {
    let update_filters = use_context::<SearchContext>().update_filters;

    rsx! {
        select {
            style: CONTROL_STYLE,
            value: value,
            onchange: move |e: Event<FormData>| {
                match FilterPatch::from_field(field, &e.value()) {
                    Ok(patch) => update_filters.call(patch),
                    Err(e) => tracing::warn!("Ignoring select value: {}", e),
                }
            },
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    value: option_value,
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
    }
}
