use serde::{Deserialize, Serialize};

/// Medicine row as the recommendation collaborator returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiMedicineRow {
    pub medicamento_id: Option<i64>,
    pub name_product: Option<String>,
    pub presentacion: Option<String>,
    pub precio: Option<f64>,
    pub moneda: Option<String>,
    pub url_image: Option<String>,
    pub url_compra: Option<String>,
    pub categoria: Option<String>,
    pub sub_categoria: Option<String>,
    pub esta_disponible: Option<bool>,
    pub id_especialidad: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub presentation: String,
    pub price: f64,
    pub currency: String,
    pub image: String,
    pub purchase_url: String,
    pub category: String,
    pub available: bool,
}

/// Wire body. `especialidad_ids` is sent as an explicit `null` to ask for
/// general recommendations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicineSearchRequest {
    pub especialidad_ids: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicineQuery {
    pub specialty_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicineListResponse {
    pub medicines: Vec<Medicine>,
    pub total: usize,
}
