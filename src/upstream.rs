//! Client for the upstream health-monitoring API.
//!
//! One accessor per upstream resource. Each accessor issues a single GET
//! with no retry and no request body, and resolves to live data when the
//! upstream answers 2xx with a well-formed payload, or to the fixed
//! dataset in [`crate::fallback`] otherwise. The contract is "always
//! resolves, never rejects": no error of any kind reaches the caller.
//!
//! Transport failures, non-success statuses, and malformed bodies are
//! still told apart internally (see [`FetchError`]), so the failure mode
//! is logged with enough context to debug connectivity, without changing
//! the returned value.
//!
//! The client is a plain clone-able value holding nothing but the base
//! URL and a connection pool. Accessors are stateless and idempotent.

use chrono::Utc;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::fallback;
use crate::model::{AgentsStatus, Analysis, HealthSample, Patient, Recommendation, RiskStats};

/// Default base URL for the upstream API.
const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Patient identifier used when the caller does not name one.
pub const DEFAULT_PATIENT_ID: i64 = 1;

/// Why a fetch did not produce live data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, network unreachable).
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream returned HTTP {0}")]
    Status(StatusCode),

    /// The body of a 2xx response could not be parsed as the expected
    /// payload.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Where a resolved value came from.
#[derive(Debug)]
pub enum Origin {
    /// Parsed from a successful upstream response.
    Live,

    /// The fixed fallback dataset, with the cause that forced it.
    Fallback(FetchError),
}

impl Origin {
    pub fn is_live(&self) -> bool {
        matches!(self, Origin::Live)
    }
}

/// An accessor result: always a well-formed value, plus its provenance.
///
/// The provenance exists for logging and tests only. It is never
/// serialized, so a caller rendering `value` cannot tell fallback data
/// from live data.
#[derive(Debug)]
pub struct Resolved<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Resolved<T> {
    /// Discard the provenance and keep the payload.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Client for the upstream health-monitoring API.
#[derive(Clone)]
pub struct HealthApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for HealthApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl HealthApiClient {
    /// Create a client for the given base URL (host plus path prefix,
    /// e.g. `http://localhost:8080/api`).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// List registered patients.
    pub async fn patients(&self) -> Resolved<Vec<Patient>> {
        self.resolve("patients", None, "/patients".to_string(), fallback::patients)
            .await
    }

    /// Recent health samples for a patient.
    pub async fn health_data(&self, patient: Option<i64>) -> Resolved<Vec<HealthSample>> {
        let id = patient.unwrap_or(DEFAULT_PATIENT_ID);
        self.resolve(
            "health-data",
            Some(id),
            format!("/health-data/{id}"),
            fallback::health_series,
        )
        .await
    }

    /// The most recent health sample for a patient.
    pub async fn latest_data(&self, patient: Option<i64>) -> Resolved<HealthSample> {
        let id = patient.unwrap_or(DEFAULT_PATIENT_ID);
        self.resolve(
            "latest-data",
            Some(id),
            format!("/latest-data/{id}"),
            fallback::latest_sample,
        )
        .await
    }

    /// Risk distribution for a patient.
    pub async fn risk_stats(&self, patient: Option<i64>) -> Resolved<RiskStats> {
        let id = patient.unwrap_or(DEFAULT_PATIENT_ID);
        self.resolve(
            "risk-stats",
            Some(id),
            format!("/risk-stats/{id}"),
            fallback::risk_stats,
        )
        .await
    }

    /// Recent emotional analyses for a patient.
    pub async fn analyses(&self, patient: Option<i64>) -> Resolved<Vec<Analysis>> {
        let id = patient.unwrap_or(DEFAULT_PATIENT_ID);
        self.resolve(
            "analyses",
            Some(id),
            format!("/analyses/{id}"),
            fallback::analyses,
        )
        .await
    }

    /// Recent recommendations for a patient.
    pub async fn recommendations(&self, patient: Option<i64>) -> Resolved<Vec<Recommendation>> {
        let id = patient.unwrap_or(DEFAULT_PATIENT_ID);
        self.resolve(
            "recommendations",
            Some(id),
            format!("/recommendations/{id}"),
            fallback::recommendations,
        )
        .await
    }

    /// Status of the background monitoring agents.
    pub async fn agents_status(&self) -> Resolved<AgentsStatus> {
        self.resolve("agents-status", None, "/agents-status".to_string(), || {
            fallback::agents_status(Utc::now().timestamp_millis())
        })
        .await
    }

    /// Fetch one resource, substituting the fallback on any failure.
    ///
    /// Transport failures, non-2xx statuses, and malformed bodies all land
    /// on the same path: log the cause, serve the fixed dataset.
    async fn resolve<T, F>(
        &self,
        resource: &'static str,
        patient: Option<i64>,
        path: String,
        fallback: F,
    ) -> Resolved<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.get_json(&path).await {
            Ok(value) => Resolved {
                value,
                origin: Origin::Live,
            },
            Err(cause) => {
                warn!(
                    resource,
                    patient,
                    error = %cause,
                    "Upstream fetch failed, serving fallback data"
                );
                Resolved {
                    value: fallback(),
                    origin: Origin::Fallback(cause),
                }
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json::<T>().await.map_err(FetchError::Decode)
    }
}
