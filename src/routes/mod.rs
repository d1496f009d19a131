pub mod signup;

use axum::Router;
use axum::routing::post;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new().route("/api/submit-signup", post(signup::submit_signup))
}
