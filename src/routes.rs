//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/{code}`, `/banch`, `/sign_up`, `/token` - public endpoints
//! - `/users/me`, `/check_me`, `/file/*`, `/files`, `/ping`, `/ping_db`
//!   - Bearer token required
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Authentication** - Bearer token on the protected routes
//! - **Path normalization** - trailing slash handling

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Returned unwrapped so tests can drive it directly; [`app_router`] adds
/// the trailing-slash normalization used in production.
pub fn router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer())
}

/// Production router: [`router`] wrapped in trailing-slash normalization,
/// so `/sign_up/` and `/sign_up` hit the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
