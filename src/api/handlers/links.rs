//! Handlers for the short link endpoints (register, resolve, status, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::links::{
    BatchRegisterEntry, BatchRegisterItem, DeleteResponse, RegisterResponse, ResolveResponse,
    StatusResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a single URL and returns its short code.
///
/// # Endpoint
///
/// `POST /{url}`
///
/// The URL to shorten arrives percent-encoded as the path segment. Any
/// string is accepted; no URL syntax validation is applied.
///
/// # Response
///
/// ```json
/// { "short_url": "4086471" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if a unique short code could not be persisted.
pub async fn register_handler(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let link = state.registration_service.register(url).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            short_url: link.short_code,
        }),
    ))
}

/// Registers a batch of URLs, one entry per input in input order.
///
/// # Endpoint
///
/// `POST /banch`
///
/// # Request Body
///
/// ```json
/// [
///   { "original-url": "https://example.com/a" },
///   { "original-url": "https://example.com/b" }
/// ]
/// ```
///
/// # Response
///
/// ```json
/// [
///   { "short-url": "4086471", "short-id": 1 },
///   { "short-url": "23550974", "short-id": 2 }
/// ]
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if any element fails to persist; links created
/// before the failing element remain registered.
pub async fn batch_register_handler(
    State(state): State<AppState>,
    Json(items): Json<Vec<BatchRegisterItem>>,
) -> Result<(StatusCode, Json<Vec<BatchRegisterEntry>>), AppError> {
    let urls = items.into_iter().map(|item| item.original_url).collect();

    let links = state.registration_service.register_batch(urls).await?;

    let entries = links
        .into_iter()
        .map(|link| BatchRegisterEntry {
            short_url: link.short_code,
            short_id: link.id,
        })
        .collect();

    Ok((StatusCode::CREATED, Json(entries)))
}

/// Resolves a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Every resolution of an existing code is recorded in the call log,
/// including resolutions of deleted codes.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code (nothing is logged) and
/// 410 Gone for a deleted one (the call is still logged).
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ResolveResponse>, AppError> {
    let url = state.resolution_service.resolve(&code).await?;

    Ok(Json(ResolveResponse { url }))
}

/// Reports how many times a code has been resolved.
///
/// # Endpoint
///
/// `GET /{code}/status`
///
/// A registered code that was never resolved reports zero.
///
/// # Errors
///
/// Returns 404 Not Found if no link carries the code.
pub async fn status_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    let count = state.status_service.call_count(&code).await?;

    Ok(Json(StatusResponse { status: count }))
}

/// Soft-deletes a short link.
///
/// # Endpoint
///
/// `DELETE /{code}`
///
/// # Behavior
///
/// - The row is kept; only the `deleted` flag is set.
/// - Subsequent resolutions return **410 Gone** and still count.
/// - Deleting an already-deleted code succeeds again.
///
/// # Errors
///
/// Returns 404 Not Found if no link carries the code.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.registration_service.delete(&code).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    Ok(Json(DeleteResponse { deleted: true }))
}
