use axum::{routing::get, Router};

use super::AppState;

pub mod route;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(route::contact_page))
}
