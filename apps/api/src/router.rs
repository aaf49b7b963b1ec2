use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use doctor_cell::router::doctor_routes;
use medicine_cell::router::medicine_routes;
use query_cell::router::query_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Doctor Finder API is running!" }))
        .nest("/interpret", query_routes())
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/medicines", medicine_routes(state))
}
