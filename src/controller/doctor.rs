use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::doctor::DoctorRepository,
    error::AppError,
    middleware::auth::{AuthGuard, Identity, Permission},
    model::{
        api::{InsertAckDto, MessageDto},
        doctor::Doctor,
    },
    state::AppState,
    util::parse::parse_object_id,
};

/// GET /doctors - List all doctors
///
/// # Authentication
/// Requires a bearer token for an admin user
pub async fn get_doctors(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &identity);
    auth_guard.require(&[Permission::Admin]).await?;

    let doctor_repo = DoctorRepository::new(&state.db);
    let doctors = doctor_repo.find_all().await?;

    Ok((StatusCode::OK, Json(doctors)))
}

/// POST /doctors - Create a doctor record
///
/// # Authentication
/// Requires a bearer token for an admin user
pub async fn create_doctor(
    State(state): State<AppState>,
    identity: Identity,
    Json(doctor): Json<Doctor>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &identity);
    auth_guard.require(&[Permission::Admin]).await?;

    let doctor_repo = DoctorRepository::new(&state.db);
    let inserted_id = doctor_repo.insert(&doctor).await?;

    Ok((StatusCode::OK, Json(InsertAckDto::created(inserted_id))))
}

/// DELETE /doctors/{id} - Delete a doctor by id
///
/// # Authentication
/// Requires a bearer token for an admin user
///
/// # Returns
/// - `200 OK`: `{message}` confirming the removal
/// - `404 Not Found`: No doctor with that id
pub async fn delete_doctor(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &identity);
    auth_guard.require(&[Permission::Admin]).await?;

    let doctor_repo = DoctorRepository::new(&state.db);

    let deleted = doctor_repo.delete(parse_object_id(&id)?).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("No doctor with id {id}")));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Doctor removed".to_string(),
        }),
    ))
}
