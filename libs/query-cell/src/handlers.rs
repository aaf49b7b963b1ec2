use axum::Json;
use tracing::info;

use shared_models::error::AppError;

use crate::models::{InterpretRequest, ParsedQuery};
use crate::services::interpreter::interpret;

pub const MAX_QUERY_CHARS: usize = 500;

#[axum::debug_handler]
pub async fn interpret_query(
    Json(request): Json<InterpretRequest>,
) -> Result<Json<ParsedQuery>, AppError> {
    if request.text.chars().count() > MAX_QUERY_CHARS {
        return Err(AppError::ValidationError(format!(
            "Query text must be at most {} characters",
            MAX_QUERY_CHARS
        )));
    }

    let parsed = interpret(&request.text);
    info!("Interpretation: {}", parsed.interpretation);

    Ok(Json(parsed))
}
