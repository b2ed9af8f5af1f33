use axum::{routing::get, Router};

use super::AppState;

pub mod route;
pub mod schema;

pub fn router() -> Router<AppState> {
    Router::new().route("/student_info", get(route::student_info))
}
