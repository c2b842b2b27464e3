//! Fixed overlay showing the session history stack, the last history event
//! and the current entry's payload.

use dioxus::prelude::*;

use crate::platform::AppHistoryBridge;

#[component]
pub fn HistoryDebugger() -> Element {
    let bridge = use_context::<AppHistoryBridge>();
    let snapshot = use_signal(|| bridge.snapshot());

    let listener_id = use_hook({
        let bridge = bridge.clone();
        move || {
            let source = bridge.clone();
            bridge.subscribe(move |_event| {
                let mut snapshot = snapshot;
                snapshot.set(source.snapshot());
            })
        }
    });
    use_drop({
        let bridge = bridge.clone();
        move || {
            bridge.unsubscribe(listener_id);
        }
    });

    let current = snapshot.read();
    let last_event = current.last_event.unwrap_or("-");
    let state_json = serde_json::to_string_pretty(&current.state).unwrap_or_else(|e| e.to_string());

    rsx! {
        div {
            id: "x-history-debugger",
            style: "
                position: fixed;
                bottom: 16px;
                right: 16px;
                width: 320px;
                max-height: 50vh;
                overflow-y: auto;
                background: rgba(17, 24, 39, 0.9);
                color: white;
                font-size: 12px;
                padding: 12px;
                border-radius: 8px;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
                z-index: 1000;
            ",
            h3 {
                style: "font-size: 14px; font-weight: 700; margin: 0 0 8px 0;",
                "History Stack Debug"
            }
            div { "Stack Size: {current.length}" }
            div { "Last Event: {last_event}" }
            div {
                style: "margin-top: 8px;",
                "Current State:"
                pre {
                    style: "
                        margin: 4px 0 0 0;
                        white-space: pre-wrap;
                        word-break: break-all;
                    ",
                    "{state_json}"
                }
            }
        }
    }
}
