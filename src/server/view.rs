//! HTML rendering of the front page.

use askama::Template;

use crate::traits::{FrontPageView, Renderer};
use crate::types::Story;
use crate::{QuietHnError, Result};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    stories: &'a [Story],
    elapsed: String,
}

/// Renders `templates/index.html`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, page: &FrontPageView) -> Result<String> {
        IndexTemplate {
            stories: &page.stories,
            elapsed: format!("{:?}", page.elapsed),
        }
        .render()
        .map_err(|e| QuietHnError::Render(e.to_string()))
    }
}
