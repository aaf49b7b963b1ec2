use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

use medicine_cell::models::Medicine;
use query_cell::models::{AttentionFilter, AvailabilityWindow, ParsedQuery};
use shared_models::AttentionMode;
use shared_utils::text::fold;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ==============================================================================
// SEARCH RESPONSE ROWS
// ==============================================================================

/// One row of the search collaborator's response: a single
/// doctor × specialty × branch × schedule-slot combination. Every field is
/// tolerant of absence or `null`, sparse rows are defaulted downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatAvailabilityRow {
    pub medico_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre_doctor: String,
    pub cmp_numero: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub validado_cmp: bool,
    pub url_imagen: Option<String>,
    pub calificacion: Option<f32>,

    pub especialidad_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre_especialidad: String,

    pub clinica_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre_clinica: String,
    pub url_logo: Option<String>,

    pub sede_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre_sede: String,
    #[serde(deserialize_with = "null_as_default")]
    pub distrito: String,
    pub direccion: Option<String>,

    pub dia: Option<String>,
    pub hora_inicio: Option<String>,
    pub hora_fin: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tipo_atencion: String,
    pub url_reserva: Option<String>,
}

// ==============================================================================
// AGGREGATES
// ==============================================================================

/// Identity of a doctor across rows.
///
/// `Derived` keys are a stable digest of name + license number, used when the
/// collaborator omits `medico_id`. Two different doctors sharing both values
/// (or both missing) collapse into one aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DoctorKey {
    Registered(i64),
    Derived(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Limited,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicLocation {
    pub id: Option<i64>,
    pub clinic_name: String,
    pub branch: String,
    pub district: String,
    pub address: String,
    pub attention_type: String,
    pub logo_url: Option<String>,
    pub next_available: Option<String>,
    pub price: Option<f64>,
    pub booking_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorAggregate {
    pub id: DoctorKey,
    pub name: String,
    pub cmp: String,
    pub verified: bool,
    pub photo: String,
    pub rating: f32,
    /// Comma-joined specialty label, accumulated across rows.
    pub specialty: String,
    pub schedules: Vec<String>,
    pub clinics: Vec<ClinicLocation>,
    pub bio: String,
    pub description: String,
    pub languages: Vec<String>,
    pub price: Option<f64>,
    pub availability: Availability,
}

impl DoctorAggregate {
    pub fn offers(&self, mode: AttentionMode) -> bool {
        self.clinics.iter().any(|clinic| mode.matches(&clinic.attention_type))
    }

    pub fn districts(&self) -> impl Iterator<Item = &str> {
        self.clinics.iter().map(|clinic| clinic.district.as_str())
    }
}

// ==============================================================================
// SEARCH REQUESTS
// ==============================================================================

const SPANISH_WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "lunes"),
    (Weekday::Tue, "martes"),
    (Weekday::Wed, "miercoles"),
    (Weekday::Thu, "jueves"),
    (Weekday::Fri, "viernes"),
    (Weekday::Sat, "sabado"),
    (Weekday::Sun, "domingo"),
];

/// Lower-case Spanish weekday name without diacritics, as the collaborator
/// expects it in `dia`.
pub fn spanish_weekday_name(day: Weekday) -> &'static str {
    SPANISH_WEEKDAYS
        .iter()
        .find(|(weekday, _)| *weekday == day)
        .map(|(_, name)| *name)
        .unwrap_or("lunes")
}

pub fn parse_spanish_weekday(value: &str) -> Option<Weekday> {
    let folded = fold(value);
    SPANISH_WEEKDAYS
        .iter()
        .find(|(_, name)| *name == folded)
        .map(|(weekday, _)| *weekday)
}

mod spanish_weekday {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(day: &Option<Weekday>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match day {
            Some(day) => serializer.serialize_str(super::spanish_weekday_name(*day)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Weekday>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_spanish_weekday))
    }
}

fn lenient_attention<'de, D>(deserializer: D) -> Result<Option<AttentionMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(AttentionMode::parse))
}

/// Filter form as the UI fills it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchFilters {
    pub doctor_name: Option<String>,
    pub specialty_id: Option<i64>,
    pub clinic_id: Option<i64>,
    pub district: Option<String>,
    #[serde(with = "spanish_weekday")]
    pub day: Option<Weekday>,
    #[serde(deserialize_with = "lenient_attention")]
    pub attention: Option<AttentionMode>,
}

/// Body sent to the search collaborator. Only present fields are serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_doctor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub especialidad_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinica_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distrito: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_atencion: Option<String>,
}

/// Keeps a free-text field only when it carries a real value.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("none"))
        .map(str::to_string)
}

impl SearchFilters {
    pub fn validate(&self) -> Result<(), DoctorError> {
        if matches!(self.specialty_id, Some(id) if id <= 0) {
            return Err(DoctorError::InvalidFilters("specialtyId must be positive".to_string()));
        }
        if matches!(self.clinic_id, Some(id) if id <= 0) {
            return Err(DoctorError::InvalidFilters("clinicId must be positive".to_string()));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.to_request() == SearchRequest::default()
    }

    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            nombre_doctor: present(&self.doctor_name),
            especialidad_id: self.specialty_id,
            clinica_id: self.clinic_id,
            distrito: present(&self.district),
            dia: self.day.map(|day| spanish_weekday_name(day).to_string()),
            tipo_atencion: self.attention.map(|mode| mode.as_str().to_string()),
        }
    }

    /// Turn an interpreted free-text query into collaborator filters.
    /// The specialty label is resolved to an id through `metadata`; a label
    /// the catalog does not know is dropped rather than guessed.
    pub fn from_parsed(parsed: &ParsedQuery, metadata: &SearchMetadata, today: NaiveDate) -> Self {
        Self {
            doctor_name: None,
            specialty_id: if parsed.has_specialty() {
                metadata.specialty_id_for(&parsed.specialty)
            } else {
                None
            },
            clinic_id: None,
            district: parsed.has_location().then(|| parsed.location.clone()),
            day: parsed.availability.weekday_from(today),
            attention: parsed.attention_type.mode(),
        }
    }
}

// ==============================================================================
// METADATA
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialtyOption {
    pub id: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicOption {
    pub id: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchOption {
    pub id: i64,
    pub clinica_id: i64,
    pub nombre: String,
    #[serde(default)]
    pub distrito: String,
}

/// Picker contents for the filter form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMetadata {
    pub especialidades: Vec<SpecialtyOption>,
    pub clinicas: Vec<ClinicOption>,
    pub sedes: Vec<BranchOption>,
    pub tipos_atencion: Vec<String>,
}

impl SearchMetadata {
    pub fn specialty_id_for(&self, label: &str) -> Option<i64> {
        let wanted = fold(label);
        self.especialidades
            .iter()
            .find(|specialty| fold(&specialty.nombre) == wanted)
            .map(|specialty| specialty.id)
    }

    pub fn branches_of(&self, clinica_id: i64) -> Vec<&BranchOption> {
        self.sedes
            .iter()
            .filter(|branch| branch.clinica_id == clinica_id)
            .collect()
    }
}

// ==============================================================================
// SEMANTIC SEARCH
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticSearchRequest {
    pub query: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(value)) if value.trim().is_empty() => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
        None => Vec::new(),
    })
}

/// Semantic collaborator payload: the usual rows plus what it matched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SemanticSearchResponse {
    pub data: Vec<FlatAvailabilityRow>,
    #[serde(deserialize_with = "one_or_many")]
    pub especialidades: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub sintoma_detectado: Vec<String>,
    pub medicamentos: Vec<medicine_cell::models::ApiMedicineRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SemanticSearchResult {
    pub doctors: Vec<DoctorAggregate>,
    pub total: usize,
    pub interpretation: String,
    pub specialties: Vec<String>,
    pub symptoms: Vec<String>,
    pub medicines: Vec<Medicine>,
    pub parsed: ParsedQuery,
}

// ==============================================================================
// LOCAL RE-FILTERING
// ==============================================================================

/// Results of the last semantic search, owned by the caller and handed back
/// for local re-filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSnapshot {
    pub query: String,
    pub doctors: Vec<DoctorAggregate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalFilters {
    pub specialty: String,
    pub location: String,
    pub availability: AvailabilityWindow,
    pub attention_type: AttentionFilter,
}

impl From<&ParsedQuery> for LocalFilters {
    fn from(parsed: &ParsedQuery) -> Self {
        Self {
            specialty: parsed.specialty.clone(),
            location: parsed.location.clone(),
            availability: parsed.availability,
            attention_type: parsed.attention_type,
        }
    }
}

// ==============================================================================
// HTTP DTOs
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorSearchResponse {
    pub doctors: Vec<DoctorAggregate>,
    pub total: usize,
}

impl From<Vec<DoctorAggregate>> for DoctorSearchResponse {
    fn from(doctors: Vec<DoctorAggregate>) -> Self {
        Self {
            total: doctors.len(),
            doctors,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalFilterRequest {
    pub snapshot: SearchSnapshot,
    #[serde(default)]
    pub filters: LocalFilters,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiSearchRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiSearchResult {
    pub parsed: ParsedQuery,
    pub filters: SearchFilters,
    pub doctors: Vec<DoctorAggregate>,
    pub total: usize,
}

// Error types specific to doctor search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DoctorError {
    InvalidFilters(String),
    Unreachable(String),
}

impl std::fmt::Display for DoctorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoctorError::InvalidFilters(msg) => write!(f, "Invalid search filters: {}", msg),
            DoctorError::Unreachable(msg) => write!(f, "Search service unavailable: {}", msg),
        }
    }
}

impl std::error::Error for DoctorError {}
