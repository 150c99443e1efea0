//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::domain::{DateRange, DateToken};
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/:start", get(temperature_stats_from))
        .route("/api/v1.0/:start/:end", get(temperature_stats_between))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Welcome page listing the available routes.
async fn welcome() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// All precipitation readings.
async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<Vec<PrecipitationResult>>, AppError> {
    let rows = state.store.precipitation().await?;
    Ok(Json(
        rows.into_iter().map(PrecipitationResult::from_row).collect(),
    ))
}

/// All station identifiers.
async fn stations(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.store.stations().await?))
}

/// Temperature observations since the fixed cutoff date.
async fn tobs(State(state): State<AppState>) -> Result<Json<Vec<TobsResult>>, AppError> {
    let rows = state.store.temperature_observations().await?;
    Ok(Json(rows.into_iter().map(TobsResult::from_row).collect()))
}

/// Temperature statistics for every date on or after `start`.
async fn temperature_stats_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStatsResponse>, AppError> {
    let range = DateRange::open(DateToken::new(&start));

    state
        .store
        .temperature_stats(&range)
        .await?
        .map(|stats| Json(TemperatureStatsResponse::from(stats)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Temperature data for start date {start} not found."),
        })
}

/// Temperature statistics for dates from `start` to `end`, inclusive.
async fn temperature_stats_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStatsResponse>, AppError> {
    let range = DateRange::between(DateToken::new(&start), DateToken::new(&end));

    state
        .store
        .temperature_stats(&range)
        .await?
        .map(|stats| Json(TemperatureStatsResponse::from(stats)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Temperature data from start date {start} to {end} not found."),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound {
        message: String,
    },
    Internal {
        message: String,
        /// Underlying cause, logged but never sent to the client
        source: Option<String>,
    },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: "data store unavailable".to_string(),
            source: Some(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => {
                debug!(%message, "Not found");
                (StatusCode::NOT_FOUND, message)
            }
            AppError::Internal { message, source } => {
                error!(%message, source = source.as_deref(), "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
