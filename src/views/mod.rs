pub mod home;
pub mod signup;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(home::index))
        .route("/{flow}", get(signup::show))
}
