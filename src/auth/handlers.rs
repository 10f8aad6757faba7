use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{
        dto::{
            CallerInfo, LoginRequest, LoginResponse, ProtectedResponse, SignupRequest,
            SignupResponse,
        },
        extractors::AuthUser,
        services,
    },
    error::{ApiJson, AppResult},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/protected", get(protected))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let (user, token) = services::signup(state.users.as_ref(), &state.jwt, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".into(),
            user: user.into(),
            token,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (_, token) = services::login(state.users.as_ref(), &state.jwt, payload).await?;
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        token,
    }))
}

#[instrument(skip(caller), fields(user_id = %caller.0.sub))]
pub async fn protected(caller: AuthUser) -> Json<ProtectedResponse> {
    let AuthUser(claims) = caller;
    Json(ProtectedResponse {
        message: "Access granted".into(),
        user: CallerInfo {
            id: claims.sub,
            email: claims.email,
        },
    })
}
