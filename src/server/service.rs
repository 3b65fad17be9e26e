//! axum router for the front page.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tracing::warn;

use crate::FrontPage;
use crate::traits::Renderer;

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub front_page: Arc<FrontPage>,
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    pub fn new(front_page: FrontPage, renderer: impl Renderer + 'static) -> Self {
        Self {
            front_page: Arc::new(front_page),
            renderer: Arc::new(renderer),
        }
    }
}

/// Build the router: a single `GET /` serving the rendered front page.
pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

async fn index(State(state): State<AppState>) -> Response {
    match state.front_page.serve(state.renderer.as_ref()).await {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            warn!(error = %e, "front page request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.public_message()).into_response()
        }
    }
}
