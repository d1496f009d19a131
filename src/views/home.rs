use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::flows::Flow;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    flows: Vec<FlowCard>,
}

struct FlowCard {
    slug: &'static str,
    name: &'static str,
    tagline: &'static str,
}

/// Chooser page: one card per flow.
pub async fn index() -> impl IntoResponse {
    let flows = Flow::ALL
        .iter()
        .map(|flow| FlowCard {
            slug: flow.slug(),
            name: flow.display_name(),
            tagline: flow.tagline(),
        })
        .collect();

    let template = HomeTemplate { flows };
    Html(template.render().unwrap_or_default())
}
