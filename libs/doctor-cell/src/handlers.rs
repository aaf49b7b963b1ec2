use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Local;
use tracing::info;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{
    AiSearchRequest, AiSearchResult, DoctorError, DoctorSearchResponse, FlatAvailabilityRow,
    LocalFilterRequest, SearchFilters, SearchMetadata, SemanticSearchRequest, SemanticSearchResult,
};
use crate::services::{
    aggregator::aggregate,
    local_filter::filter_locally,
    search::DoctorSearchService,
};

impl From<DoctorError> for AppError {
    fn from(error: DoctorError) -> Self {
        match error {
            DoctorError::InvalidFilters(msg) => AppError::ValidationError(msg),
            DoctorError::Unreachable(msg) => AppError::ExternalService(msg),
        }
    }
}

fn require_text(text: &str, field: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}

// ==============================================================================
// SEARCH HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn search_doctors(
    State(state): State<Arc<AppConfig>>,
    Json(filters): Json<SearchFilters>,
) -> Result<Json<DoctorSearchResponse>, AppError> {
    filters.validate()?;

    let search_service = DoctorSearchService::new(&state);
    let doctors = search_service.search(&filters).await;

    Ok(Json(DoctorSearchResponse::from(doctors)))
}

#[axum::debug_handler]
pub async fn semantic_search(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<SemanticSearchRequest>,
) -> Result<Json<SemanticSearchResult>, AppError> {
    require_text(&request.query, "query")?;

    let search_service = DoctorSearchService::new(&state);
    let result = search_service.semantic_search(&request.query).await;

    Ok(Json(result))
}

#[axum::debug_handler]
pub async fn ai_search(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<AiSearchRequest>,
) -> Result<Json<AiSearchResult>, AppError> {
    require_text(&request.text, "text")?;

    let search_service = DoctorSearchService::new(&state);
    let result = search_service.ai_search(&request.text, Local::now().date_naive()).await;

    info!("AI search: {} ({} doctors)", result.parsed.interpretation, result.total);
    Ok(Json(result))
}

#[axum::debug_handler]
pub async fn get_metadata(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<SearchMetadata>, AppError> {
    let search_service = DoctorSearchService::new(&state);
    Ok(Json(search_service.fetch_metadata().await))
}

// ==============================================================================
// LOCAL HANDLERS (NO COLLABORATOR CALLS)
// ==============================================================================

#[axum::debug_handler]
pub async fn aggregate_rows(
    Json(rows): Json<Vec<FlatAvailabilityRow>>,
) -> Result<Json<DoctorSearchResponse>, AppError> {
    Ok(Json(DoctorSearchResponse::from(aggregate(&rows))))
}

#[axum::debug_handler]
pub async fn filter_results(
    Json(request): Json<LocalFilterRequest>,
) -> Result<Json<DoctorSearchResponse>, AppError> {
    let doctors = filter_locally(&request.snapshot, &request.filters);
    Ok(Json(DoctorSearchResponse::from(doctors)))
}
