use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::search::PageIndex;
use crate::ui::components::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/page/:page")]
    ListingPage { page: u32 },
    #[route("/job/:id?:from_page")]
    JobDetailPage { id: String, from_page: u32 },
}

impl Route {
    /// Listing at `page`; page 1 is the root route
    pub fn listing(page: PageIndex) -> Self {
        if page.is_first() {
            Route::Home {}
        } else {
            Route::ListingPage { page: page.get() }
        }
    }

    /// Detail view remembering the listing page it was opened from
    pub fn job_detail(id: impl Into<String>, from: PageIndex) -> Self {
        Route::JobDetailPage {
            id: id.into(),
            from_page: from.get(),
        }
    }

    /// Where Back leads from a detail view: the remembered page, else page 1
    pub fn back_from_detail(from_page: u32) -> Self {
        Self::listing(PageIndex::from_route(from_page).unwrap_or_default())
    }

    /// Page shown by a listing route, `None` for other routes
    pub fn listing_page(&self) -> Option<PageIndex> {
        match self {
            Route::Home {} => Some(PageIndex::FIRST),
            Route::ListingPage { page } => Some(PageIndex::new(*page).unwrap_or_default()),
            Route::JobDetailPage { .. } => None,
        }
    }

    /// Listing a search submitted from this route lands on: the page already
    /// shown, or page 1 from a detail view
    pub fn search_landing(&self) -> Route {
        Self::listing(self.listing_page().unwrap_or(PageIndex::FIRST))
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("All-Job")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
