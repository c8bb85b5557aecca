use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    data::booking::BookingRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::Identity,
    model::{api::InsertAckDto, booking::Booking},
    state::AppState,
    util::parse::parse_object_id,
};

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// GET /bookings - List the authenticated user's bookings
///
/// # Authentication
/// Requires a bearer token; the `email` query parameter must match the
/// token's identity, otherwise 403.
///
/// # Returns
/// - `200 OK`: JSON array of the user's bookings
pub async fn get_bookings(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    if identity.email != query.email {
        return Err(AuthError::AccessDenied(identity.email).into());
    }

    let booking_repo = BookingRepository::new(&state.db);
    let bookings = booking_repo.find_by_email(&query.email).await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// GET /bookings/{id} - Fetch one booking by id
///
/// # Returns
/// - `200 OK`: The booking document
/// - `400 Bad Request`: Malformed id
/// - `404 Not Found`: No booking with that id
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking_repo = BookingRepository::new(&state.db);

    let booking = booking_repo
        .find_by_id(parse_object_id(&id)?)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No booking with id {id}")))?;

    Ok((StatusCode::OK, Json(booking)))
}

/// POST /bookings - Create a booking
///
/// The unique (email, appointmentDate, treatment) index rejects a repeat
/// reservation; that outcome is a soft rejection, not an HTTP error.
///
/// # Returns
/// - `200 OK`: `{acknowledged: true, insertedId}` on creation, or
///   `{acknowledged: false, message}` when the user already holds an
///   appointment for this treatment and date
pub async fn create_booking(
    State(state): State<AppState>,
    Json(booking): Json<Booking>,
) -> Result<impl IntoResponse, AppError> {
    let booking_repo = BookingRepository::new(&state.db);

    let ack = match booking_repo.insert(&booking).await? {
        Some(inserted_id) => InsertAckDto::created(inserted_id),
        None => InsertAckDto::rejected(duplicate_booking_message(&booking)),
    };

    Ok((StatusCode::OK, Json(ack)))
}

fn duplicate_booking_message(booking: &Booking) -> String {
    format!(
        "You already have an appointment of {} on {}",
        booking.treatment, booking.appointment_date
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_names_treatment_and_date() {
        let booking = Booking {
            id: None,
            email: "jane@example.com".to_string(),
            appointment_date: "2023-01-01".to_string(),
            treatment: "Braces".to_string(),
            slot: "09:00".to_string(),
            paid: false,
        };

        assert_eq!(
            duplicate_booking_message(&booking),
            "You already have an appointment of Braces on 2023-01-01"
        );
    }
}
