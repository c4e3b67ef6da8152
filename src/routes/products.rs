use axum::{
    routing::get,
    Router,
};
use crate::handlers::product::{index, manage_view};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/Product", get(index))
        .route("/Product/Index", get(index))
        .route("/Product/ManageView", get(manage_view))
}
