use crate::ui::Route;
use dioxus::prelude::*;

/// Back to the listing page the detail view was opened from
#[component]
pub fn BackButton(to: Route) -> Element {
    rsx! {
        Link { to: to, class: "button back-button", "← Back" }
    }
}
