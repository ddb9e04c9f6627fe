//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Requires a valid `Authorization: Bearer <token>` header.
///
/// The token is hashed and looked up in storage; the owning [`User`] is
/// attached as a request extension so handlers can read the caller's
/// identity. Disabled accounts are rejected even when their token still
/// matches.
///
/// # Errors
///
/// Responds `401 Unauthorized` (with a `WWW-Authenticate: Bearer` header,
/// per RFC 6750) when the header is missing or malformed, no stored token
/// matches, or the account is disabled.
///
/// [`User`]: crate::domain::entities::User
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match AuthBearer::from_request_parts(&mut parts, &()).await {
        Ok(AuthBearer(token)) => token,
        Err(_) => {
            return Err(AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            ));
        }
    };

    let user = st.auth_service.authenticate(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
