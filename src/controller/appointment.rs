use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    data::appointment::AppointmentOptionRepository, error::AppError,
    service::availability::AvailabilityService, state::AppState,
};

#[derive(Deserialize)]
pub struct DateQuery {
    /// Missing date matches no bookings, so every slot is reported open.
    #[serde(default)]
    pub date: String,
}

/// GET /appointmentOptions - List treatments with remaining slots for a date
///
/// Availability is computed in-process: the option templates are fetched
/// unfiltered and the slots booked for the date are subtracted per treatment.
///
/// # Returns
/// - `200 OK`: JSON array of options, slots reduced to the remaining ones
pub async fn get_appointment_options(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let availability = AvailabilityService::new(&state.db);
    let options = availability.options_for_date(&query.date).await?;

    Ok((StatusCode::OK, Json(options)))
}

/// GET /v2/appointmentOptions - Same listing via store-side aggregation
///
/// Must return the same remaining-slot sets as the v1 endpoint; the
/// subtraction runs inside one aggregation pipeline instead of in-process.
///
/// # Returns
/// - `200 OK`: JSON array of options, slots reduced to the remaining ones
pub async fn get_appointment_options_v2(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let availability = AvailabilityService::new(&state.db);
    let options = availability.options_for_date_aggregated(&query.date).await?;

    Ok((StatusCode::OK, Json(options)))
}

/// GET /appointmentSpecialty - List treatment names only
///
/// # Returns
/// - `200 OK`: JSON array of `{_id, name}` projections
pub async fn get_specialties(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let option_repo = AppointmentOptionRepository::new(&state.db);
    let specialties = option_repo.find_specialties().await?;

    Ok((StatusCode::OK, Json(specialties)))
}
