//! DTOs for the short link endpoints.

use serde::{Deserialize, Serialize};

/// Response for single-URL registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub short_url: String,
}

/// One URL inside a batch registration request.
///
/// The batch wire format uses kebab-case keys, unlike the single-URL
/// endpoint; both shapes are kept as-is for client compatibility.
#[derive(Debug, Deserialize)]
pub struct BatchRegisterItem {
    #[serde(rename = "original-url")]
    pub original_url: String,
}

/// One created link inside a batch registration response.
#[derive(Debug, Serialize)]
pub struct BatchRegisterEntry {
    #[serde(rename = "short-url")]
    pub short_url: String,

    #[serde(rename = "short-id")]
    pub short_id: i64,
}

/// Response carrying the original URL for a resolved code.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub url: String,
}

/// Response carrying the recorded call count for a code.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: i64,
}

/// Response confirming a soft delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}
