//! HTTP API routes
//!
//! Translates query parameters into proximity queries and results into JSON.

use crate::error::Error;
use crate::geo::resolve;
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = state.config.server.cors;

    let router = Router::new()
        .route("/", get(near_handler))
        .route("/api/near", get(near_handler))
        .route("/api/status", get(status_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Proximity query parameters
///
/// Built from the raw key/value pairs. A repeated key keeps its first value.
#[derive(Debug, Default, PartialEq)]
pub struct NearParams {
    /// Country code of the reference postal code
    pub country: String,
    /// Reference postal code
    pub zip: String,
    /// Radius in kilometers, integer. Negative returns exact matches only.
    pub max: Option<String>,
}

impl NearParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = NearParams::default();
        let (mut country, mut zip) = (None, None);

        for (key, value) in pairs {
            match key.as_str() {
                "country" if country.is_none() => country = Some(value),
                "zip" if zip.is_none() => zip = Some(value),
                "max" if params.max.is_none() => params.max = Some(value),
                _ => {}
            }
        }

        params.country = country.unwrap_or_default();
        params.zip = zip.unwrap_or_default();
        params
    }
}

/// API error response body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorMessage {
    pub message: String,
}

/// API error: a status with an optional message body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: Option<String>,
}

impl ApiError {
    /// 500 without a body, so internals never reach clients
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.message {
            Some(message) => (self.status, Json(ErrorMessage { message })).into_response(),
            None => self.status.into_response(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound { .. } => ApiError {
                status: StatusCode::NOT_FOUND,
                message: Some("combination of 'country' and 'zip' not found".to_string()),
            },
            Error::InvalidRadius(_) => ApiError {
                status: StatusCode::BAD_REQUEST,
                message: Some("invalid value for 'max'".to_string()),
            },
            other => {
                error!("Request failed: {}", other);
                ApiError::internal()
            }
        }
    }
}

/// Parse the `max` parameter, falling back to `default` when absent or empty
pub fn parse_max(max: Option<&str>, default: i64) -> Result<i64, Error> {
    match max {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|e| {
            warn!("Invalid max {:?}: {}", value, e);
            Error::InvalidRadius(format!("{:?} is not an integer", value))
        }),
    }
}

/// Find locations near a postal code
///
/// GET /?country=DE&zip=10115&max=5
async fn near_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = NearParams::from_pairs(pairs);
    let max = parse_max(params.max.as_deref(), state.config.query.default_max)?;
    let results = resolve(&state.index, &params.country, &params.zip, max as f64)?;

    let body = serde_json::to_vec(&results).map_err(|e| {
        error!("Failed to serialize {} results: {}", results.len(), e);
        ApiError::internal()
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Number of loaded records
    pub records: usize,
    /// Loaded country codes
    pub countries: Vec<String>,
    /// When the index was loaded
    pub loaded_at: DateTime<Utc>,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: state.index.len(),
        countries: state.index.countries().into_iter().map(String::from).collect(),
        loaded_at: state.loaded_at,
    })
}
