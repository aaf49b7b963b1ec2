use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    // Routes backed by the search collaborator
    let search_routes = Router::new()
        .route("/search", post(handlers::search_doctors))
        .route("/semantic-search", post(handlers::semantic_search))
        .route("/ai-search", post(handlers::ai_search))
        .route("/metadata", get(handlers::get_metadata));

    // Pure transformations over data the caller already holds
    let local_routes = Router::new()
        .route("/aggregate", post(handlers::aggregate_rows))
        .route("/filter", post(handlers::filter_results));

    Router::new()
        .merge(search_routes)
        .merge(local_routes)
        .with_state(state)
}
