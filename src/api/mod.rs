use axum::{extract::State, routing::get, Json, Router};
use tracing::{error, instrument};

use crate::auth::dto::PublicUser;
use crate::auth::extractors::AuthUser;
use crate::auth::repo::User;
use crate::error::AuthError;
use crate::state::AppState;

/// Protected endpoint group. Every handler takes [`AuthUser`], so requests
/// without a valid bearer token are rejected before reaching a handler.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/me", get(me))
}

async fn ping(_user: AuthUser) -> &'static str {
    "Pong"
}

#[instrument(skip(state, user))]
async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<PublicUser>, AuthError> {
    let record = User::find_by_id(&state.db, user.id)
        .await?
        .ok_or_else(|| {
            error!(user_id = %user.id, "token references unknown user");
            AuthError::InvalidToken
        })?;

    Ok(Json(PublicUser {
        id: record.id,
        email: record.email,
    }))
}
