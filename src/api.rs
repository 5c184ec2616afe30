//! HTTP handlers for the dashboard surface.
//!
//! Every data route mirrors one upstream resource, plus an aggregated
//! overview. Handlers never fail: the data layer always resolves to a
//! renderable value, so each handler returns `Json<T>` unconditionally
//! and the response does not reveal whether the data is live or fallback.
//!
//! Routes that take a patient identifier also accept the bare path, in
//! which case the identifier defaults to `1`.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{info, instrument};

use crate::dashboard::PatientOverview;
use crate::model::{
    AgentsStatus, Analysis, HealthSample, Patient, Recommendation, RiskStats,
};
use crate::upstream::HealthApiClient;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: HealthApiClient,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(home))
        .route("/api/patients", get(get_patients))
        .route("/api/health-data", get(get_health_data))
        .route("/api/health-data/:id", get(get_health_data))
        .route("/api/latest-data", get(get_latest_data))
        .route("/api/latest-data/:id", get(get_latest_data))
        .route("/api/risk-stats", get(get_risk_stats))
        .route("/api/risk-stats/:id", get(get_risk_stats))
        .route("/api/analyses", get(get_analyses))
        .route("/api/analyses/:id", get(get_analyses))
        .route("/api/recommendations", get(get_recommendations))
        .route("/api/recommendations/:id", get(get_recommendations))
        .route("/api/agents-status", get(get_agents_status))
        .route("/api/overview", get(get_overview))
        .route("/api/overview/:id", get(get_overview))
        .route("/health", get(health_check))
        .with_state(state)
}

/// GET /api - plain confirmation that the service is up.
pub async fn home() -> &'static str {
    "API de Monitoramento de Saúde Mental está rodando!"
}

/// GET /api/patients - list registered patients.
#[instrument(skip(state))]
pub async fn get_patients(State(state): State<AppState>) -> Json<Vec<Patient>> {
    let resolved = state.client.patients().await;
    info!(
        count = resolved.value.len(),
        live = resolved.origin.is_live(),
        "Patients served"
    );
    Json(resolved.into_value())
}

/// GET /api/health-data/{id} - recent samples for a patient.
#[instrument(skip(state))]
pub async fn get_health_data(
    State(state): State<AppState>,
    patient: Option<Path<i64>>,
) -> Json<Vec<HealthSample>> {
    let patient = patient.map(|Path(id)| id);
    let resolved = state.client.health_data(patient).await;
    info!(
        patient,
        samples = resolved.value.len(),
        live = resolved.origin.is_live(),
        "Health data served"
    );
    Json(resolved.into_value())
}

/// GET /api/latest-data/{id} - the most recent sample for a patient.
#[instrument(skip(state))]
pub async fn get_latest_data(
    State(state): State<AppState>,
    patient: Option<Path<i64>>,
) -> Json<HealthSample> {
    let patient = patient.map(|Path(id)| id);
    let resolved = state.client.latest_data(patient).await;
    info!(
        patient,
        date = %resolved.value.date,
        live = resolved.origin.is_live(),
        "Latest data served"
    );
    Json(resolved.into_value())
}

/// GET /api/risk-stats/{id} - risk distribution for a patient.
#[instrument(skip(state))]
pub async fn get_risk_stats(
    State(state): State<AppState>,
    patient: Option<Path<i64>>,
) -> Json<RiskStats> {
    let patient = patient.map(|Path(id)| id);
    let resolved = state.client.risk_stats(patient).await;
    info!(patient, live = resolved.origin.is_live(), "Risk stats served");
    Json(resolved.into_value())
}

/// GET /api/analyses/{id} - recent emotional analyses for a patient.
#[instrument(skip(state))]
pub async fn get_analyses(
    State(state): State<AppState>,
    patient: Option<Path<i64>>,
) -> Json<Vec<Analysis>> {
    let patient = patient.map(|Path(id)| id);
    let resolved = state.client.analyses(patient).await;
    info!(
        patient,
        count = resolved.value.len(),
        live = resolved.origin.is_live(),
        "Analyses served"
    );
    Json(resolved.into_value())
}

/// GET /api/recommendations/{id} - recent recommendations for a patient.
#[instrument(skip(state))]
pub async fn get_recommendations(
    State(state): State<AppState>,
    patient: Option<Path<i64>>,
) -> Json<Vec<Recommendation>> {
    let patient = patient.map(|Path(id)| id);
    let resolved = state.client.recommendations(patient).await;
    info!(
        patient,
        count = resolved.value.len(),
        live = resolved.origin.is_live(),
        "Recommendations served"
    );
    Json(resolved.into_value())
}

/// GET /api/agents-status - status of the background monitoring agents.
#[instrument(skip(state))]
pub async fn get_agents_status(State(state): State<AppState>) -> Json<AgentsStatus> {
    let resolved = state.client.agents_status().await;
    info!(
        agents = resolved.value.agents.len(),
        live = resolved.origin.is_live(),
        "Agent status served"
    );
    Json(resolved.into_value())
}

/// GET /api/overview/{id} - aggregated dashboard view for a patient.
#[instrument(skip(state))]
pub async fn get_overview(
    State(state): State<AppState>,
    patient: Option<Path<i64>>,
) -> Json<PatientOverview> {
    let patient = patient.map(|Path(id)| id);
    let overview = PatientOverview::fetch(&state.client, patient).await;
    info!(patient, "Overview served");
    Json(overview)
}

/// GET /health - simple health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
