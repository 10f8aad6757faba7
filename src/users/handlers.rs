use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    error::AppResult,
    state::AppState,
    users::repo_types::PublicUser,
};

pub fn users_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

#[instrument(skip(state, caller), fields(caller_id = %caller.0.sub))]
pub async fn list_users(
    State(state): State<AppState>,
    caller: AuthUser,
) -> AppResult<Json<Vec<PublicUser>>> {
    let users = state.users.list().await?;
    info!(count = users.len(), "listed users");
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}
