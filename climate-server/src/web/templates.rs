//! Askama templates for the welcome page.

use askama::Template;

/// Welcome page listing the available routes.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;
