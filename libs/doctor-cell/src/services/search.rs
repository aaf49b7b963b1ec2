// libs/doctor-cell/src/services/search.rs

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use medicine_cell::services::medicine::map_api_rows;
use query_cell::models::ParsedQuery;
use query_cell::services::interpreter::interpret;
use shared_config::AppConfig;
use shared_gateway::SearchApiClient;

use crate::models::{
    AiSearchResult, DoctorAggregate, DoctorError, FlatAvailabilityRow, SearchFilters,
    SearchMetadata, SemanticSearchRequest, SemanticSearchResponse, SemanticSearchResult,
};
use crate::services::aggregator::aggregate;

pub struct DoctorSearchService {
    api: SearchApiClient,
    doctor_search_path: String,
    semantic_search_path: String,
    metadata_path: String,
}

impl DoctorSearchService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: SearchApiClient::new(config),
            doctor_search_path: config.doctor_search_path.clone(),
            semantic_search_path: config.semantic_search_path.clone(),
            metadata_path: config.metadata_path.clone(),
        }
    }

    /// Search by structured filters. Collaborator failures come back as an
    /// empty list, indistinguishable from a search that matched nothing.
    pub async fn search(&self, filters: &SearchFilters) -> Vec<DoctorAggregate> {
        match self.try_search(filters).await {
            Ok(doctors) => doctors,
            Err(e) => {
                error!("Doctor search failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Like [`search`](Self::search) but keeps the failure for callers that
    /// need to tell "nothing matched" from "could not ask".
    pub async fn try_search(&self, filters: &SearchFilters) -> Result<Vec<DoctorAggregate>, DoctorError> {
        filters.validate()?;

        let payload = filters.to_request();
        debug!("Searching doctors with payload: {:?}", payload);

        let rows: Vec<FlatAvailabilityRow> = self.api
            .post(&self.doctor_search_path, &payload)
            .await
            .map_err(|e| DoctorError::Unreachable(e.to_string()))?;

        let doctors = aggregate(&rows);
        info!("Doctor search returned {} rows for {} doctors", rows.len(), doctors.len());

        Ok(doctors)
    }

    /// Free-text search through the semantic collaborator. The local
    /// interpreter always runs too: its sentence is the fallback message and
    /// its filters seed later local re-filtering.
    pub async fn semantic_search(&self, query: &str) -> SemanticSearchResult {
        let parsed = interpret(query);

        let request = SemanticSearchRequest { query: query.to_string() };
        let response: SemanticSearchResponse = match self.api
            .post(&self.semantic_search_path, &request)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Semantic search failed: {}", e);
                SemanticSearchResponse::default()
            }
        };

        let doctors = aggregate(&response.data);
        let interpretation = semantic_interpretation(
            &response.especialidades,
            &response.sintoma_detectado,
            &parsed,
        );
        let medicines = map_api_rows(response.medicamentos);

        info!(
            "Semantic search '{}' matched {} doctors, {} medicines",
            query,
            doctors.len(),
            medicines.len()
        );

        SemanticSearchResult {
            total: doctors.len(),
            doctors,
            interpretation,
            specialties: response.especialidades,
            symptoms: response.sintoma_detectado,
            medicines,
            parsed,
        }
    }

    /// Picker contents; an unreachable collaborator yields empty pickers.
    pub async fn fetch_metadata(&self) -> SearchMetadata {
        match self.api.get::<SearchMetadata>(&self.metadata_path).await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Could not load search metadata: {}", e);
                SearchMetadata::default()
            }
        }
    }

    /// Interpret `text` locally, resolve it against the metadata catalog and
    /// run a structured search with the result.
    pub async fn ai_search(&self, text: &str, today: NaiveDate) -> AiSearchResult {
        let parsed = interpret(text);

        let metadata = if parsed.has_specialty() {
            self.fetch_metadata().await
        } else {
            SearchMetadata::default()
        };

        let filters = SearchFilters::from_parsed(&parsed, &metadata, today);
        if parsed.has_specialty() && filters.specialty_id.is_none() {
            warn!("Specialty '{}' is not in the catalog, searching without it", parsed.specialty);
        }

        let doctors = self.search(&filters).await;

        AiSearchResult {
            total: doctors.len(),
            parsed,
            filters,
            doctors,
        }
    }
}

/// Message shown next to semantic results, built from what the collaborator
/// says it matched. Falls back to the local interpretation.
pub fn semantic_interpretation(specialties: &[String], symptoms: &[String], parsed: &ParsedQuery) -> String {
    match (specialties.is_empty(), symptoms.is_empty()) {
        (false, false) => format!(
            "Estos especialistas en {} te pueden ayudar con tu {}.",
            specialties.join(", "),
            symptoms.join(" y ")
        ),
        (false, true) => format!("He encontrado especialistas en: {}", specialties.join(", ")),
        _ => parsed.interpretation.clone(),
    }
}
