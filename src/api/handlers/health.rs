//! Handlers for the health check endpoints.

use axum::{Json, extract::State};

use crate::api::dto::health::{DbProbe, PingDbResponse, PingResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Timed database probe, reporting failures in-band.
///
/// # Endpoint
///
/// `GET /ping`
///
/// # Response
///
/// Always 200 OK:
///
/// ```json
/// { "DB": 0.00421 }
/// ```
///
/// or, when the database cannot be reached:
///
/// ```json
/// { "DB": "Unavailable" }
/// ```
pub async fn ping_handler(State(state): State<AppState>) -> Json<PingResponse> {
    let elapsed = state.health_service.probe_timed().await;

    Json(PingResponse {
        db: DbProbe::from_elapsed(elapsed),
    })
}

/// Database readiness probe.
///
/// # Endpoint
///
/// `GET /ping_db`
///
/// # Errors
///
/// Returns 503 Service Unavailable when the database cannot be reached.
pub async fn ping_db_handler(
    State(state): State<AppState>,
) -> Result<Json<PingDbResponse>, AppError> {
    let ready = state.health_service.ping_db().await?;

    Ok(Json(PingDbResponse { db_ready: ready }))
}
