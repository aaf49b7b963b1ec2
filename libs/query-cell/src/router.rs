use axum::{
    Router,
    routing::post,
};

use crate::handlers;

/// Interpretation is pure and needs no shared state.
pub fn query_routes() -> Router {
    Router::new()
        .route("/", post(handlers::interpret_query))
}
