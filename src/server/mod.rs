//! HTTP surface.
//!
//! This module provides:
//! - The axum router serving the front page (`service`)
//! - The askama-backed HTML renderer (`view`)
//! - Configuration types (`config`)

pub mod config;
pub mod service;
pub mod view;

pub use service::{AppState, router};
pub use view::HtmlRenderer;
