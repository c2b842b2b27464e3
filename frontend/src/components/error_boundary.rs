//! Error boundaries for the app shell and the result area.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color: red; font-size: 40px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "오류가 발생했습니다",
                    }
                    p {
                        style: "color: darkred; font-size: 20px; padding: 10px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color: blue; font-size: 20px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                        "검색 페이지 다시 열기"
                    }
                    pre {
                        style: "color: black; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing result list from taking the search form down with it.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            gap: 8px;
                            padding: 24px;
                        ",
                        h2 {
                            style: "color: red; font-size: 24px; margin: 0;",
                            "결과를 표시할 수 없습니다"
                        }
                        pre {
                            style: "color: darkred; border: 1px solid red; padding: 10px; border-radius: 5px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                            "{error_txt}"
                        }
                        button {
                            style: "color: blue; font-size: 16px; border: 1px solid blue; padding: 8px 16px; border-radius: 5px; background: white;",
                            onclick: move |_| err.clear_errors(),
                            "다시 시도"
                        }
                    }
                }
            },
            {children}
        }
    }
}
