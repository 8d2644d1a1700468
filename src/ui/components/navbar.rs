use crate::ui::Route;
use dioxus::prelude::*;

use super::search_bar::SearchBar;

/// Layout component: fixed top bar with the search bar above every page
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                Link { to: Route::Home {}, class: "brand", "All-Job" }
                SearchBar {}
            }
        }
        main { class: "page", Outlet::<Route> {} }
    }
}
