use std::sync::Arc;

use axum::{extract::State, Json};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{MedicineListResponse, MedicineQuery};
use crate::services::medicine::MedicineService;

#[axum::debug_handler]
pub async fn search_medicines(
    State(state): State<Arc<AppConfig>>,
    Json(query): Json<MedicineQuery>,
) -> Result<Json<MedicineListResponse>, AppError> {
    if matches!(query.specialty_id, Some(id) if id <= 0) {
        return Err(AppError::BadRequest("specialtyId must be positive".to_string()));
    }

    let medicine_service = MedicineService::new(&state);
    let medicines = medicine_service.by_specialty(query.specialty_id).await;

    Ok(Json(MedicineListResponse {
        total: medicines.len(),
        medicines,
    }))
}
