use askama::Template;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::flows::Flow;

#[derive(Template)]
#[template(path = "signup.html")]
struct SignupTemplate {
    flow: &'static str,
    title: &'static str,
    description: &'static str,
    button_text: &'static str,
    redirect_url: &'static str,
}

/// Landing page for one flow; unknown slugs are not routable.
pub async fn show(Path(slug): Path<String>) -> Response {
    let Some(flow) = Flow::from_slug(&slug) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let template = SignupTemplate {
        flow: flow.slug(),
        title: flow.display_name(),
        description: flow.description(),
        button_text: flow.button_text(),
        redirect_url: flow.redirect_url(),
    };
    Html(template.render().unwrap_or_default()).into_response()
}
