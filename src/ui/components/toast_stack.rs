use dioxus::prelude::*;

use crate::ui::state::toast::{Toast, ToastKind};

fn toast_accent(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "#1a7f3c",
        ToastKind::Error => "#c62828",
        ToastKind::Info => "#1f5fbf",
    }
}

#[component]
pub fn ToastStack(toasts: Vec<Toast>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div {
            style: "position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 1300;",
            for toast in toasts.iter() {
                {
                    let id = toast.id;
                    let accent = toast_accent(toast.kind);
                    rsx!(
                        div {
                            key: "{id}",
                            style: "min-width: 260px; background: #fff; border: 1px solid #ddd; border-left: 4px solid {accent}; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); padding: 10px 12px; display: flex; gap: 8px;",
                            div { style: "flex: 1;",
                                div { style: "font-weight: 600;", "{toast.title}" }
                                div { style: "color: #555; font-size: 13px;", "{toast.message}" }
                            }
                            button {
                                style: "border: none; background: transparent; cursor: pointer;",
                                onclick: move |_| on_dismiss.call(id),
                                "×"
                            }
                        }
                    )
                }
            }
        }
    }
}
