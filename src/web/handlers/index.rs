//! Index page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::domain::operation::Operation;

/// One utility card on the index page.
#[derive(Debug, Clone)]
pub struct FeatureCard {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub endpoint: &'static str,
    pub needs_form: bool,
}

impl From<Operation> for FeatureCard {
    fn from(op: Operation) -> Self {
        Self {
            key: op.name(),
            name: op.title(),
            icon: op.icon(),
            endpoint: op.endpoint(),
            needs_form: op.needs_form(),
        }
    }
}

/// Template for the index page.
///
/// Renders `templates/index.html`: one card per utility plus the shared
/// output log driven by `/static/js/presenter.js`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    pub features: Vec<FeatureCard>,
}

impl IndexTemplate {
    pub fn new() -> Self {
        Self {
            title: "Dev Utility Hub",
            features: Operation::CARDS.into_iter().map(FeatureCard::from).collect(),
        }
    }
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the index page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate::new()
}
