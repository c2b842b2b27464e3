//! Search result item card component.

use dioxus::prelude::*;
use common::{
    display::{format_date, format_price},
    search_options::{category_label, status_label},
    search_result::ResultItem,
};

#[component]
pub fn SearchResultItemCard(item: ReadSignal<ResultItem>) -> Element {
    let ResultItem {
        id,
        title,
        category,
        status,
        price,
        created_at,
        description,
    } = item.read().clone();

    let category = category_label(&category);
    let status = status_label(&status);
    let price = format_price(price);
    let created_at = format_date(&created_at);

    rsx! {
        div {
            id: "x-result-item-{id}",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                padding: 16px;
                box-sizing: border-box;
                box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
            ",
            h3 {
                style: "
                    font-size: 18px;
                    font-weight: 600;
                    margin: 0;
                ",
                "{title}"
            }
            p {
                style: "
                    color: #4B5563;
                    margin: 0;
                ",
                "{description}"
            }
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    font-size: 14px;
                    color: #6B7280;
                ",
                CardField { label: "카테고리", value: category }
                CardField { label: "상태", value: status }
                CardField { label: "가격", value: price }
                CardField { label: "등록일", value: created_at }
            }
        }
    }
}

#[component]
fn CardField(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            span { style: "font-weight: 500;", "{label}: " }
            "{value}"
        }
    }
}
