mod back_button;
mod page;
pub mod utils;
mod view;

pub use page::JobDetailPage;
