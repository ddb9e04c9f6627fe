//! API route configuration.
//!
//! Routes are split by authentication requirement: the short link
//! endpoints and the signup/token pair are public, everything touching
//! files, profiles and health requires a Bearer token via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    batch_register_handler, check_me_handler, delete_handler, download_handler, files_handler,
    me_handler, ping_db_handler, ping_handler, register_handler, resolve_handler, sign_up_handler,
    status_handler, token_handler, upload_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without authentication.
///
/// # Endpoints
///
/// - `POST   /{url}`          - Register a URL (the segment is the URL itself)
/// - `POST   /banch`          - Register a batch of URLs
/// - `GET    /{code}`         - Resolve a code to its original URL
/// - `GET    /{code}/status`  - Call count for a code
/// - `DELETE /{code}`         - Soft-delete a link
/// - `POST   /sign_up`        - Create a user account
/// - `POST   /token`          - Issue a bearer token
///
/// Static segments (`/banch`, `/sign_up`, `/token`) take precedence over
/// the `/{code}` capture.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/banch", post(batch_register_handler))
        .route("/sign_up", post(sign_up_handler))
        .route("/token", post(token_handler))
        .route(
            "/{code}",
            post(register_handler)
                .get(resolve_handler)
                .delete(delete_handler),
        )
        .route("/{code}/status", get(status_handler))
}

/// Routes requiring Bearer token authentication.
///
/// # Endpoints
///
/// - `GET  /users/me`                 - Authenticated user's profile
/// - `GET  /check_me`                 - Same profile, wrapped in `user`
/// - `POST /file/{path}/upload-file`  - Store an uploaded file
/// - `GET  /file/download?id=`        - Fetch a stored file
/// - `GET  /files`                    - List stored file metadata
/// - `GET  /ping`                     - Timed database probe (in-band result)
/// - `GET  /ping_db`                  - Database readiness probe
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(me_handler))
        .route("/check_me", get(check_me_handler))
        .route("/file/{path}/upload-file", post(upload_handler))
        .route("/file/download", get(download_handler))
        .route("/files", get(files_handler))
        .route("/ping", get(ping_handler))
        .route("/ping_db", get(ping_db_handler))
}
