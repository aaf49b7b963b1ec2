use std::sync::Arc;

use axum::{
    Router,
    routing::post,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn medicine_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/search", post(handlers::search_medicines))
        .with_state(state)
}
