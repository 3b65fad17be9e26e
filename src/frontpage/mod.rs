//! Request orchestration

mod builder;
mod front_page;

pub use builder::{QuietHn, QuietHnBuilder};
pub use front_page::FrontPage;
