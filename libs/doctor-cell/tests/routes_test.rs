// libs/doctor-cell/tests/routes_test.rs

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    Json,
};
use assert_matches::assert_matches;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path};

use doctor_cell::handlers::{ai_search, filter_results, search_doctors, semantic_search};
use doctor_cell::models::*;
use doctor_cell::router::doctor_routes;
use shared_models::error::AppError;
use shared_utils::test_utils::{json_merge, MockSearchResponses, TestConfig};

async fn send(app: axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn snapshot_doctors() -> Vec<Value> {
    vec![
        json_merge(
            MockSearchResponses::doctor_row(1, "Carlos Mendoza", "Cardiología"),
            json!({ "distrito": "Miraflores" }),
        ),
        json_merge(
            MockSearchResponses::doctor_row(2, "Lucía Paredes", "Dermatología"),
            json!({ "distrito": "Surco", "tipo_atencion": "Virtual" }),
        ),
        json_merge(
            MockSearchResponses::doctor_row(3, "Jorge Salas", "Cardiología"),
            json!({ "distrito": "San Isidro", "dia": null, "hora_inicio": null, "hora_fin": null }),
        ),
    ]
}

// ==============================================================================
// HANDLERS CALLED DIRECTLY
// ==============================================================================

#[tokio::test]
async fn test_search_handler_rejects_invalid_ids() {
    let state = TestConfig::default().to_arc();
    let filters = SearchFilters { specialty_id: Some(0), ..Default::default() };

    let result = search_doctors(State(state), Json(filters)).await;

    assert_matches!(result, Err(AppError::ValidationError(_)));
}

#[tokio::test]
async fn test_text_handlers_reject_blank_input() {
    let state = TestConfig::default().to_arc();

    let semantic = semantic_search(
        State(state.clone()),
        Json(SemanticSearchRequest { query: "   ".to_string() }),
    )
    .await;
    assert_matches!(semantic, Err(AppError::BadRequest(_)));

    let ai = ai_search(State(state), Json(AiSearchRequest { text: String::new() })).await;
    assert_matches!(ai, Err(AppError::BadRequest(_)));
}

#[tokio::test]
async fn test_filter_handler_without_filters_keeps_everything() {
    let rows: Vec<FlatAvailabilityRow> = snapshot_doctors()
        .into_iter()
        .map(|row| serde_json::from_value(row).unwrap())
        .collect();
    let snapshot = SearchSnapshot {
        query: "cardiólogo".to_string(),
        doctors: doctor_cell::services::aggregate(&rows),
    };

    let Json(response) = filter_results(Json(LocalFilterRequest {
        snapshot,
        filters: LocalFilters::default(),
    }))
    .await
    .unwrap();

    assert_eq!(response.total, 3);
}

// ==============================================================================
// ROUTES OVER HTTP
// ==============================================================================

#[tokio::test]
async fn test_search_route_returns_aggregates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/busqueda_medicos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSearchResponses::doctor_row(4, "Rosa Quispe", "Pediatría"),
            json_merge(
                MockSearchResponses::doctor_row(4, "Rosa Quispe", "Neonatología"),
                json!({ "dia": "Martes" })
            )
        ])))
        .mount(&mock_server)
        .await;

    let app = doctor_routes(TestConfig::with_url(mock_server.uri()).to_arc());
    let (status, body) = send(app, "POST", "/search", Some(json!({ "specialtyId": 2 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["doctors"][0]["id"], 4);
    assert_eq!(body["doctors"][0]["specialty"], "Pediatría, Neonatología");
    assert_eq!(body["doctors"][0]["availability"], "available");
    assert_eq!(body["doctors"][0]["clinics"][0]["clinicName"], "Clínica San Pablo");
}

#[tokio::test]
async fn test_search_route_degrades_to_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/busqueda_medicos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let app = doctor_routes(TestConfig::with_url(mock_server.uri()).to_arc());
    let (status, body) = send(app, "POST", "/search", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["doctors"], json!([]));
}

#[tokio::test]
async fn test_search_route_rejects_negative_clinic() {
    let app = doctor_routes(TestConfig::default().to_arc());
    let (status, body) = send(app, "POST", "/search", Some(json!({ "clinicId": -1 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("clinicId"));
}

#[tokio::test]
async fn test_metadata_route() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/metadata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockSearchResponses::metadata_response()))
        .mount(&mock_server)
        .await;

    let app = doctor_routes(TestConfig::with_url(mock_server.uri()).to_arc());
    let (status, body) = send(app, "GET", "/metadata", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["especialidades"][0]["nombre"], "Cardiología");
    assert_eq!(body["sedes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_semantic_route_reports_interpretation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/busqueda_semantica"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [MockSearchResponses::doctor_row(5, "Diego Ramos", "Cardiología")],
            "especialidades": ["Cardiología"]
        })))
        .mount(&mock_server)
        .await;

    let app = doctor_routes(TestConfig::with_url(mock_server.uri()).to_arc());
    let (status, body) = send(
        app,
        "POST",
        "/semantic-search",
        Some(json!({ "query": "me late rápido el corazón" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["interpretation"], "He encontrado especialistas en: Cardiología");
    assert_eq!(body["medicines"], json!([]));
}

#[tokio::test]
async fn test_aggregate_route_folds_rows() {
    let app = doctor_routes(TestConfig::default().to_arc());
    let rows = json!([
        MockSearchResponses::doctor_row(9, "Ana Torres", "Ginecología"),
        json_merge(
            MockSearchResponses::doctor_row(9, "Ana Torres", "Ginecología"),
            json!({ "clinica_id": 11, "nombre_clinica": "Clínica Anglo Americana", "sede_id": 110 })
        ),
        json_merge(
            MockSearchResponses::doctor_row(0, "Pedro Díaz", "Urología"),
            json!({ "medico_id": null, "calificacion": 0 })
        )
    ]);

    let (status, body) = send(app, "POST", "/aggregate", Some(rows)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["doctors"][0]["clinics"].as_array().unwrap().len(), 2);
    assert_eq!(body["doctors"][0]["schedules"].as_array().unwrap().len(), 1);
    assert!(body["doctors"][1]["id"].as_str().unwrap().starts_with("cmp-"));
    assert_eq!(body["doctors"][1]["rating"], 5.0);
}

#[tokio::test]
async fn test_filter_route_narrows_snapshot() {
    let app = doctor_routes(TestConfig::default().to_arc());

    // Fold rows first, then send the aggregates back as the snapshot.
    let (_, aggregated) = send(
        app.clone(),
        "POST",
        "/aggregate",
        Some(Value::Array(snapshot_doctors())),
    )
    .await;

    let (status, body) = send(
        app.clone(),
        "POST",
        "/filter",
        Some(json!({
            "snapshot": { "query": "doctores", "doctors": aggregated["doctors"].clone() },
            "filters": { "specialty": "cardiologia", "availability": "today" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["doctors"][0]["name"], "Carlos Mendoza");

    let (_, virtual_only) = send(
        app,
        "POST",
        "/filter",
        Some(json!({
            "snapshot": { "query": "doctores", "doctors": aggregated["doctors"].clone() },
            "filters": { "attentionType": "Virtual", "location": "surco" }
        })),
    )
    .await;

    assert_eq!(virtual_only["total"], 1);
    assert_eq!(virtual_only["doctors"][0]["name"], "Lucía Paredes");
}

#[tokio::test]
async fn test_ai_search_route_echoes_parsed_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search/busqueda_medicos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let app = doctor_routes(TestConfig::with_url(mock_server.uri()).to_arc());
    let (status, body) = send(
        app,
        "POST",
        "/ai-search",
        Some(json!({ "text": "consulta online en san isidro" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["parsed"]["location"], "san isidro");
    assert_eq!(body["parsed"]["attentionType"], "Virtual");
    assert_eq!(
        body["parsed"]["interpretation"],
        "Esta es la lista de con atención virtual en San Isidro"
    );
    assert_eq!(body["filters"]["attention"], "Virtual");
    assert_eq!(body["total"], 0);
}
