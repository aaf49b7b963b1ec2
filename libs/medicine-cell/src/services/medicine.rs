use tracing::{debug, error, info};

use shared_config::AppConfig;
use shared_gateway::SearchApiClient;

use crate::models::{ApiMedicineRow, Medicine, MedicineSearchRequest};

const DEFAULT_CURRENCY: &str = "PEN";

pub struct MedicineService {
    api: SearchApiClient,
    medicine_search_path: String,
}

impl MedicineService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: SearchApiClient::new(config),
            medicine_search_path: config.medicine_search_path.clone(),
        }
    }

    /// Recommended medicines for a specialty, or general recommendations when
    /// `specialty_id` is `None`. Any failure is logged and yields an empty list.
    pub async fn by_specialty(&self, specialty_id: Option<i64>) -> Vec<Medicine> {
        let request = MedicineSearchRequest { especialidad_ids: specialty_id };
        debug!("Fetching medicines for specialty {:?}", specialty_id);

        match self.api
            .post::<_, Vec<ApiMedicineRow>>(&self.medicine_search_path, &request)
            .await
        {
            Ok(rows) => {
                let medicines = map_api_rows(rows);
                info!("Loaded {} medicines for specialty {:?}", medicines.len(), specialty_id);
                medicines
            }
            Err(e) => {
                error!("Error fetching medicines: {}", e);
                Vec::new()
            }
        }
    }
}

/// Collaborator rows → UI medicines. Rows without a product name are dropped;
/// rows without an id get a positional one.
pub fn map_api_rows(rows: Vec<ApiMedicineRow>) -> Vec<Medicine> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let name = row.name_product.filter(|name| !name.trim().is_empty())?;
            Some(Medicine {
                id: row
                    .medicamento_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| format!("med-{}", index)),
                name,
                presentation: row.presentacion.unwrap_or_default(),
                price: row.precio.unwrap_or(0.0),
                currency: row.moneda.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                image: row.url_image.unwrap_or_default(),
                purchase_url: row.url_compra.unwrap_or_default(),
                category: row.categoria.unwrap_or_default(),
                available: row.esta_disponible.unwrap_or(true),
            })
        })
        .collect()
}
