use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::api::TokenDto,
    service::token::TokenService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct TokenQuery {
    pub email: String,
}

/// GET /jwt - Issue a bearer token for a registered email
///
/// Trusts the caller-supplied email; the companion front-end gates this
/// endpoint behind its own login. Unknown emails get a 403 with an empty
/// token, which is what that front-end expects.
///
/// # Returns
/// - `200 OK`: `{accessToken}`
/// - `403 Forbidden`: `{accessToken: ""}` - no user with that email
pub async fn issue_token(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user_repo = UserRepository::new(&state.db);

    if user_repo.find_by_email(&query.email).await?.is_none() {
        return Err(AuthError::UnknownUser(query.email).into());
    }

    let token = TokenService::new(&state.access_token_secret).issue(&query.email)?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            access_token: token,
        }),
    ))
}
