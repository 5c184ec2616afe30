//! Integration tests for the dashboard HTTP surface.
//!
//! These tests verify the full request/response cycle through the HTTP
//! API, with the upstream either unreachable (fallback serving) or
//! simulated (live passthrough).

use axum_test::TestServer;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vigia::api::{AppState, router};
use vigia::upstream::HealthApiClient;

/// Test server whose upstream refuses connections.
async fn unreachable_server() -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = AppState {
        client: HealthApiClient::new(&format!("http://{addr}/api")),
    };
    TestServer::new(router(state)).unwrap()
}

/// Test server wired to a simulated upstream.
fn server_for(upstream: &MockServer) -> TestServer {
    let state = AppState {
        client: HealthApiClient::new(&upstream.uri()),
    };
    TestServer::new(router(state)).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = unreachable_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_home_message() {
    let server = unreachable_server().await;

    let response = server.get("/api").await;

    response.assert_status_ok();
    assert!(response.text().contains("rodando"));
}

#[tokio::test]
async fn test_patients_served_from_fallback_when_upstream_down() {
    let server = unreachable_server().await;

    let response = server.get("/api/patients").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["nome"], "João Silva");
    assert_eq!(body[1]["idade"], 75);
}

#[tokio::test]
async fn test_latest_data_fallback_shape() {
    let server = unreachable_server().await;

    let body: serde_json::Value = server.get("/api/latest-data").await.json();

    assert_eq!(body["date"], "2024-01-07");
    assert_eq!(body["sono"], 6.2);
    assert_eq!(body["fc"], 82);
}

#[tokio::test]
async fn test_recommendations_fallback_list() {
    let server = unreachable_server().await;

    let body: serde_json::Value = server.get("/api/recommendations").await.json();

    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 4);
    for item in items {
        assert!(item["recomendacao"].is_string());
        assert!(item["tipo"].is_string());
    }
}

#[tokio::test]
async fn test_agents_status_fallback_has_three_active_agents() {
    let server = unreachable_server().await;

    let body: serde_json::Value = server.get("/api/agents-status").await.json();

    let agents = body["agents"].as_array().unwrap();
    assert_eq!(agents.len(), 3);
    for agent in agents {
        assert_eq!(agent["status"], "ativo");
    }
    assert!(body["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_risk_stats_passthrough_from_live_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/risk-stats/5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"baixo": 45.0, "moderado": 40.0, "alto": 15.0})),
        )
        .mount(&upstream)
        .await;

    let server = server_for(&upstream);
    let body: serde_json::Value = server.get("/api/risk-stats/5").await.json();

    assert_eq!(body["baixo"], 45.0);
    assert_eq!(body["moderado"], 40.0);
    assert_eq!(body["alto"], 15.0);
}

#[tokio::test]
async fn test_health_data_passthrough_from_live_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health-data/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"date": "2024-03-01", "sono": 7.9, "humor": 8, "atividade": 42, "fc": 71}
        ])))
        .mount(&upstream)
        .await;

    let server = server_for(&upstream);
    let body: serde_json::Value = server.get("/api/health-data/2").await.json();

    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["date"], "2024-03-01");
    assert_eq!(items[0]["humor"], 8);
}

#[tokio::test]
async fn test_overview_shape() {
    let server = unreachable_server().await;

    let response = server.get("/api/overview/1").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["patient"]["nome"], "João Silva");
    assert_eq!(body["latest"]["date"], "2024-01-07");
    assert_eq!(body["indicators"]["sleep"], "insuficiente");
    assert_eq!(body["indicators"]["mood"], "neutro");
    assert_eq!(body["indicators"]["activity"], "sedentario");
    assert_eq!(body["indicators"]["heart_rate"], "normal");
    assert_eq!(body["series"].as_array().unwrap().len(), 7);
    assert_eq!(body["analyses"].as_array().unwrap().len(), 4);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
    assert_eq!(body["agents"]["agents"].as_array().unwrap().len(), 3);

    // Degradation is silent: nothing in the body marks fallback data.
    assert!(body.get("errors").is_none());
    assert!(body.get("degraded").is_none());
}

#[tokio::test]
async fn test_overview_defaults_to_patient_one() {
    let server = unreachable_server().await;

    let body: serde_json::Value = server.get("/api/overview").await.json();

    assert_eq!(body["patient"]["id"], 1);
}

#[tokio::test]
async fn test_overview_unknown_patient_has_no_patient_record() {
    let server = unreachable_server().await;

    let body: serde_json::Value = server.get("/api/overview/99").await.json();

    assert!(body["patient"].is_null());
    // The rest of the view still renders from fallback data.
    assert_eq!(body["series"].as_array().unwrap().len(), 7);
}
