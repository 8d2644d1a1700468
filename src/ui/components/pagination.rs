use crate::search::PageIndex;
use dioxus::prelude::*;

/// Previous/Next stepper. Knows nothing about the last page.
#[component]
pub fn Pagination(current: PageIndex, on_change: EventHandler<PageIndex>) -> Element {
    let previous = current.previous();

    rsx! {
        div { class: "pagination",
            button {
                class: "button",
                disabled: previous.is_none(),
                onclick: move |_| {
                    if let Some(page) = previous {
                        on_change.call(page);
                    }
                },
                "Previous"
            }
            span { class: "page-number", "Page {current}" }
            button {
                class: "button",
                onclick: move |_| on_change.call(current.next()),
                "Next"
            }
        }
    }
}
