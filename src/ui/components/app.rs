use crate::ui::{Route, MAIN_CSS};
use dioxus::prelude::*;
use tracing::debug;

use super::search_context::SearchStateProvider;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SearchStateProvider {
            Router::<Route> {}
        }
    }
}
