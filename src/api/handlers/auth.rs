//! Handlers for signup, token issuance and profile endpoints.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::dto::auth::{
    CheckMeResponse, SignUpRequest, SignUpResponse, TokenRequest, TokenResponse, UserProfile,
};
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user account.
///
/// # Endpoint
///
/// `POST /sign_up`
///
/// # Request Body
///
/// ```json
/// { "user_name": "alice", "password": "s3cret" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the name or password fails validation or
/// the name is already taken.
pub async fn sign_up_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>), AppError> {
    let user = state
        .auth_service
        .sign_up(payload.user_name, payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            id: user.id,
            account_id: user.account_id,
        }),
    ))
}

/// Verifies credentials and issues a bearer token.
///
/// # Endpoint
///
/// `POST /token`
///
/// # Response
///
/// ```json
/// { "access_token": "u0f8...48 chars...", "token_type": "Bearer" }
/// ```
///
/// The plaintext token is returned exactly once; only its hash is stored.
///
/// # Errors
///
/// Returns 401 Unauthorized for unknown users, wrong passwords and
/// disabled accounts, with a `WWW-Authenticate: Bearer` header.
pub async fn token_handler(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = state
        .auth_service
        .login(&payload.user_name, &payload.password)
        .await?;

    Ok(Json(TokenResponse::bearer(token)))
}

/// Returns the authenticated user's profile.
///
/// # Endpoint
///
/// `GET /users/me`
///
/// The user is resolved by the bearer auth middleware and passed through
/// a request extension.
pub async fn me_handler(Extension(user): Extension<User>) -> Json<UserProfile> {
    Json(UserProfile::from(user))
}

/// Returns the authenticated user's profile wrapped in a `user` object.
///
/// # Endpoint
///
/// `GET /check_me`
pub async fn check_me_handler(Extension(user): Extension<User>) -> Json<CheckMeResponse> {
    Json(CheckMeResponse {
        user: UserProfile::from(user),
    })
}
