use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::user::UserRepository,
    error::AppError,
    middleware::auth::{AuthGuard, Identity, Permission},
    model::{
        api::{AdminStatusDto, InsertAckDto, MessageDto},
        user::User,
    },
    state::AppState,
    util::parse::parse_object_id,
};

/// GET /users - List all users
///
/// # Authentication
/// Requires a bearer token for an admin user
///
/// # Returns
/// - `200 OK`: JSON array of all users
/// - `403 Forbidden`: Caller is not an admin
pub async fn get_users(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &identity);
    auth_guard.require(&[Permission::Admin]).await?;

    let user_repo = UserRepository::new(&state.db);
    let users = user_repo.find_all().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// POST /users - Register a user
///
/// Idempotent by email: an already-registered email short-circuits with a
/// message instead of an error.
///
/// # Returns
/// - `200 OK`: `{acknowledged: true, insertedId}` on creation, or
///   `{message}` when the email is already registered
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<impl IntoResponse, AppError> {
    let user_repo = UserRepository::new(&state.db);

    match user_repo.insert(&user).await? {
        Some(inserted_id) => {
            Ok((StatusCode::OK, Json(InsertAckDto::created(inserted_id))).into_response())
        }
        None => Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "This email is already in use".to_string(),
            }),
        )
            .into_response()),
    }
}

/// GET /users/admin/{email} - Check whether an email holds the admin role
///
/// # Authentication
/// Requires a bearer token (any authenticated user)
///
/// # Returns
/// - `200 OK`: `{isAdmin}` - false when the user does not exist
pub async fn get_admin_status(
    State(state): State<AppState>,
    _identity: Identity,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_repo = UserRepository::new(&state.db);

    let is_admin = user_repo
        .find_by_email(&email)
        .await?
        .is_some_and(|user| user.is_admin());

    Ok((StatusCode::OK, Json(AdminStatusDto { is_admin })))
}

/// PUT /users/admin/{id} - Grant the admin role to an existing user
///
/// Plain conditional update; an unknown id is a 404, never an upsert.
///
/// # Authentication
/// Requires a bearer token for an admin user
///
/// # Returns
/// - `200 OK`: `{message}` confirming the promotion
/// - `403 Forbidden`: Caller is not an admin
/// - `404 Not Found`: No user with that id
pub async fn make_admin(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &identity);
    auth_guard.require(&[Permission::Admin]).await?;

    let user_repo = UserRepository::new(&state.db);

    let promoted = user_repo.promote_to_admin(parse_object_id(&id)?).await?;
    if !promoted {
        return Err(AppError::NotFound(format!("No user with id {id}")));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User promoted to admin".to_string(),
        }),
    ))
}
