//! Handlers for file upload, download and listing.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::api::dto::files::{DownloadParams, FileInfo, FilesResponse, UploadResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Filename used in `Content-Disposition` when the stored name is empty.
const FALLBACK_FILE_NAME: &str = "NoName";

/// Stores an uploaded file.
///
/// # Endpoint
///
/// `POST /file/{path}/upload-file`
///
/// The first file part of the multipart body is stored; its filename and
/// bytes are captured, and the `{path}` segment is recorded as the file's
/// logical path. Remaining parts are ignored.
///
/// # Response
///
/// ```json
/// { "id": 1, "file_id": "0cb5f37e-1f24-4bb9-a72f-1a0b6e2f3c55" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or a body without a file
/// part, 503 Service Unavailable when the blob store rejects the write.
pub async fn upload_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::bad_request("Invalid multipart body", json!({ "error": e.to_string() }))
    })? {
        let Some(file_name) = field.file_name().map(ToString::to_string) else {
            continue;
        };

        let bytes = field.bytes().await.map_err(|e| {
            AppError::bad_request("Invalid multipart body", json!({ "error": e.to_string() }))
        })?;

        let record = state
            .file_service
            .upload(path, file_name, bytes.to_vec())
            .await?;

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                id: record.id,
                file_id: record.file_id,
            }),
        ));
    }

    Err(AppError::bad_request("No file provided", json!({})))
}

/// Streams a stored file back as an attachment.
///
/// # Endpoint
///
/// `GET /file/download?id={file_id}`
///
/// # Response
///
/// The raw bytes with `application/octet-stream` and a
/// `Content-Disposition` attachment carrying the stored filename
/// (or `NoName` when the stored name is empty).
///
/// # Errors
///
/// Returns 404 Not Found for an unknown id or a missing blob.
pub async fn download_handler(
    State(state): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> Result<impl IntoResponse, AppError> {
    let (record, bytes) = state.file_service.download(&params.id).await?;

    let file_name = if record.file_name.is_empty() {
        FALLBACK_FILE_NAME
    } else {
        record.file_name.as_str()
    };

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/octet-stream".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    ))
}

/// Lists metadata for every stored file.
///
/// # Endpoint
///
/// `GET /files`
///
/// # Response
///
/// ```json
/// {
///   "files": [
///     {
///       "id": "0cb5f37e-1f24-4bb9-a72f-1a0b6e2f3c55",
///       "file_path": "reports",
///       "file_name": "summary.txt",
///       "size": 2048,
///       "created_at": "08/25/2026, 14:03:07"
///     }
///   ]
/// }
/// ```
pub async fn files_handler(
    State(state): State<AppState>,
) -> Result<Json<FilesResponse>, AppError> {
    let records = state.file_service.list().await?;

    Ok(Json(FilesResponse {
        files: records.into_iter().map(FileInfo::from).collect(),
    }))
}
