use axum::{
    routing::get,
    Router, middleware,
};
use crate::handlers::employee::{
    index, create_form, create, missing_id, edit_form, edit, delete_form, delete_confirmed
};
use crate::middleware::antiforgery::require_antiforgery;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/Employee", get(index))
        .route("/Employee/Index", get(index))
        .route("/Employee/Create", get(create_form).post(create))
        .route("/Employee/Edit", get(missing_id))
        .route("/Employee/Edit/{id}", get(edit_form).post(edit))
        .route("/Employee/Delete", get(missing_id))
        .route("/Employee/Delete/{id}", get(delete_form).post(delete_confirmed))
        // Only mutating methods are checked; GET form views issue the tokens.
        .route_layer(middleware::from_fn_with_state(state, require_antiforgery))
}
