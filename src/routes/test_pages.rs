use axum::{
    routing::get,
    Router,
};
use crate::handlers::test_page::{index, about};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/Test", get(index))
        .route("/Test/Index", get(index))
        .route("/Test/About", get(about))
}
