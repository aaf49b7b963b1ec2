use std::sync::Arc;

use serde_json::{json, Value};

use shared_config::AppConfig;

pub struct TestConfig {
    pub search_api_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            search_api_url: "http://localhost:8089".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            search_api_url: url.into(),
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig::with_base_url(self.search_api_url.clone())
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Canned collaborator payloads shaped like the real search API.
pub struct MockSearchResponses;

impl MockSearchResponses {
    /// One flat availability row. Callers override fields with `json_merge`.
    pub fn doctor_row(medico_id: i64, nombre: &str, especialidad: &str) -> Value {
        json!({
            "medico_id": medico_id,
            "nombre_doctor": nombre,
            "cmp_numero": format!("CMP{:05}", medico_id),
            "validado_cmp": true,
            "url_imagen": format!("https://cdn.example.com/doctors/{}.jpg", medico_id),
            "calificacion": 4.7,
            "especialidad_id": 1,
            "nombre_especialidad": especialidad,
            "clinica_id": 10,
            "nombre_clinica": "Clínica San Pablo",
            "url_logo": "https://cdn.example.com/logos/san-pablo.png",
            "sede_id": 100,
            "nombre_sede": "Sede Surco",
            "distrito": "Surco",
            "dia": "Lunes",
            "hora_inicio": "08:00:00",
            "hora_fin": "12:00:00",
            "tipo_atencion": "Presencial"
        })
    }

    pub fn metadata_response() -> Value {
        json!({
            "especialidades": [
                { "id": 1, "nombre": "Cardiología" },
                { "id": 2, "nombre": "Pediatría" },
                { "id": 3, "nombre": "Neurología" }
            ],
            "clinicas": [
                { "id": 10, "nombre": "Clínica San Pablo" },
                { "id": 11, "nombre": "Clínica Anglo Americana" }
            ],
            "sedes": [
                { "id": 100, "clinica_id": 10, "nombre": "Sede Surco", "distrito": "Surco" },
                { "id": 110, "clinica_id": 11, "nombre": "Sede San Isidro", "distrito": "San Isidro" }
            ],
            "tipos_atencion": ["Presencial", "Virtual"]
        })
    }

    pub fn medicine_row(id: i64, name: &str, especialidad: i64) -> Value {
        json!({
            "categoria": "Cardiovascular",
            "sub_categoria": "Antihipertensivos",
            "medicamento_id": id,
            "name_product": name,
            "esta_disponible": true,
            "url_image": format!("https://cdn.example.com/meds/{}.png", id),
            "precio": 24.9,
            "moneda": "PEN",
            "url_compra": format!("https://shop.example.com/p/{}", id),
            "presentacion": "Caja x 30 tabletas",
            "id_especialidad": especialidad
        })
    }

    pub fn error_response(message: &str) -> Value {
        json!({ "detail": message })
    }
}

/// Shallow merge of `overrides` into `base`, both JSON objects.
pub fn json_merge(mut base: Value, overrides: Value) -> Value {
    if let (Some(base_map), Value::Object(extra)) = (base.as_object_mut(), overrides) {
        for (key, value) in extra {
            base_map.insert(key, value);
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::with_url("http://127.0.0.1:9999").to_app_config();
        assert_eq!(config.search_api_url, "http://127.0.0.1:9999");
        assert!(config.is_configured());
    }

    #[test]
    fn test_json_merge_overrides_fields() {
        let row = json_merge(
            MockSearchResponses::doctor_row(1, "Ana Torres", "Ginecología"),
            json!({ "dia": "Martes", "url_reserva": "https://book.example.com/1" }),
        );
        assert_eq!(row["dia"], "Martes");
        assert_eq!(row["url_reserva"], "https://book.example.com/1");
        assert_eq!(row["nombre_doctor"], "Ana Torres");
    }
}
