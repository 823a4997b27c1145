//! HTTP request handlers for the Router service.
//!
//! Implements the analysis endpoint plus liveness and health checks using axum.

use crate::config::RouterConfig;
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use benford_domain::{analyze, AnalysisResult, BenfordError, ErrorKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Body returned by `GET /`
pub const LIVENESS_MESSAGE: &str = "Benford API is live";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Router configuration
    pub config: Arc<RouterConfig>,
}

impl AppState {
    /// Wrap a configuration in shared state
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Analysis request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Free-form text containing numbers
    #[serde(default)]
    pub input: String,
    /// Significance level in [0, 1]; the configured default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significance_level: Option<f64>,
}

/// Analysis response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Observed count per leading digit ("1".."9")
    pub actual_distribution: BTreeMap<u8, u64>,
    /// Benford percentage per leading digit ("1".."9")
    pub expected_distribution: BTreeMap<u8, Decimal>,
    /// Pearson chi-square statistic
    pub chi_square_statistic: f64,
    /// Upper-tail p-value
    pub p_value: f64,
    /// Whether the p-value exceeds the significance level
    pub conforms_to_benford: bool,
}

impl From<&AnalysisResult> for AnalyzeResponse {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            actual_distribution: result.actual_distribution().iter().collect(),
            expected_distribution: result.expected_distribution().iter().collect(),
            chi_square_statistic: result.chi_square_statistic(),
            p_value: result.p_value(),
            conforms_to_benford: result.conforms_to_benford(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Service version
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error category label
    pub error: String,
    /// Human-readable detail
    pub message: Option<String>,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Error raised by the analysis core
    Analysis(BenfordError),
    /// Request body could not be decoded
    Rejection(JsonRejection),
    /// Internal server error
    InternalError(String),
}

/// Category label and client-facing message for a core error
fn classify(err: &BenfordError) -> (StatusCode, &'static str, String) {
    match err.kind() {
        ErrorKind::InvalidInput => {
            let message = match err {
                BenfordError::InvalidInput(msg) => msg.clone(),
                other => other.to_string(),
            };
            (StatusCode::BAD_REQUEST, "Invalid Input", message)
        }
        ErrorKind::InvalidSignificanceLevel => (
            StatusCode::BAD_REQUEST,
            "Invalid Significance Level",
            err.to_string(),
        ),
        ErrorKind::InsufficientData => {
            (StatusCode::BAD_REQUEST, "Insufficient Data", err.to_string())
        }
        ErrorKind::ComputationFailure => server_error(),
    }
}

fn server_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Server Error",
        "Unexpected server error".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, label, message) = match self {
            AppError::Analysis(e) => {
                if e.is_client_error() {
                    warn!("Rejected analysis request: {}", e);
                } else {
                    let cause = std::error::Error::source(&e)
                        .map(|s| s.to_string())
                        .unwrap_or_default();
                    error!(error = %e, cause = %cause, "Analysis failed");
                }
                classify(&e)
            }
            AppError::Rejection(rejection) => {
                warn!("Rejected request body: {}", rejection.body_text());
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    (rejection.status(), "Payload Too Large", rejection.body_text())
                } else {
                    (StatusCode::BAD_REQUEST, "Invalid Input", rejection.body_text())
                }
            }
            AppError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                server_error()
            }
        };

        let body = Json(ErrorResponse {
            error: label.to_string(),
            message: Some(message),
        });
        (status, body).into_response()
    }
}

impl From<BenfordError> for AppError {
    fn from(e: BenfordError) -> Self {
        AppError::Analysis(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejection(rejection)
    }
}

/// POST /benford/analyze - Test the numbers in a text against Benford's Law
async fn analyze_text(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    let significance_level = request
        .significance_level
        .unwrap_or(state.config.default_significance_level);

    let result = tokio::task::spawn_blocking(move || analyze(&request.input, significance_level))
        .await
        .map_err(|e| AppError::InternalError(format!("Analysis task failed: {}", e)))??;

    info!(
        sample_size = result.sample_size(),
        p_value = result.p_value(),
        conforms = result.conforms_to_benford(),
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse::from(&result)))
}

/// GET / - Liveness probe
async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /health - Health check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let body_limit = state.config.max_body_bytes;

    AxumRouter::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
        .route("/benford/analyze", post(analyze_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
