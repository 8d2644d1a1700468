use crate::search::{DatePosted, SearchQuery};
use dioxus::prelude::*;

use super::search_context::use_search_submit;

/// Search inputs with their own transient state.
///
/// Nothing reaches the listing until the user submits; the committed query
/// is then replaced wholesale.
#[component]
pub fn SearchBar() -> Element {
    let on_search = use_search_submit();
    let title = use_signal(String::new);
    let location = use_signal(String::new);
    let date_posted = use_signal(DatePosted::default);
    let mut is_menu_open = use_signal(|| false);

    let submit = use_callback(move |_: ()| {
        on_search.call(SearchQuery::new(title(), location(), date_posted()));
        is_menu_open.set(false);
    });

    rsx! {
        // Hamburger toggle, only visible on narrow windows
        button {
            class: "menu-toggle",
            onclick: move |_| is_menu_open.set(!is_menu_open()),
            if is_menu_open() {
                "✕"
            } else {
                "☰"
            }
        }

        div { class: "search-form search-form-wide",
            SearchFields {
                title: title,
                location: location,
                date_posted: date_posted,
                submit: submit,
            }
        }

        if is_menu_open() {
            div { class: "search-form search-form-stacked",
                SearchFields {
                    title: title,
                    location: location,
                    date_posted: date_posted,
                    submit: submit,
                }
            }
        }
    }
}

#[component]
fn SearchFields(
    title: Signal<String>,
    location: Signal<String>,
    date_posted: Signal<DatePosted>,
    submit: Callback<()>,
) -> Element {
    let mut title = title;
    let mut location = location;
    let mut date_posted = date_posted;

    let on_enter = move |event: KeyboardEvent| {
        if event.key() == Key::Enter {
            submit.call(());
        }
    };

    rsx! {
        input {
            r#type: "text",
            placeholder: "Job title",
            value: "{title}",
            oninput: move |event: FormEvent| title.set(event.value()),
            onkeydown: on_enter,
        }
        input {
            r#type: "text",
            placeholder: "Location",
            value: "{location}",
            oninput: move |event: FormEvent| location.set(event.value()),
            onkeydown: on_enter,
        }
        select {
            value: "{date_posted().as_param()}",
            onchange: move |event: FormEvent| {
                if let Ok(filter) = event.value().parse::<DatePosted>() {
                    date_posted.set(filter);
                }
            },
            for filter in DatePosted::ALL {
                option {
                    value: "{filter.as_param()}",
                    selected: filter == date_posted(),
                    "{filter.label()}"
                }
            }
        }
        button { class: "button", onclick: move |_| submit.call(()), "Search" }
    }
}
