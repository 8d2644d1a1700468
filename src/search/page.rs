use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// 1-based page cursor into the listing endpoint.
///
/// There is no upper bound: the API never reports a last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageIndex(NonZeroU32);

impl PageIndex {
    pub const FIRST: PageIndex = PageIndex(NonZeroU32::MIN);

    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    /// Page remembered in navigation state, 0 meaning none was attached
    pub fn from_route(page: u32) -> Option<Self> {
        Self::new(page)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn is_first(&self) -> bool {
        *self == Self::FIRST
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// `None` on the first page
    pub fn previous(&self) -> Option<Self> {
        Self::new(self.get() - 1)
    }
}

impl Default for PageIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
