use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    controller::{appointment, auth, booking, doctor, payment, user},
    state::AppState,
};

async fn root() -> &'static str {
    "Doctors portal server is running"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/appointmentOptions",
            get(appointment::get_appointment_options),
        )
        .route(
            "/v2/appointmentOptions",
            get(appointment::get_appointment_options_v2),
        )
        .route("/appointmentSpecialty", get(appointment::get_specialties))
        .route(
            "/bookings",
            get(booking::get_bookings).post(booking::create_booking),
        )
        .route("/bookings/{id}", get(booking::get_booking))
        .route("/users", get(user::get_users).post(user::create_user))
        .route(
            "/users/admin/{key}",
            get(user::get_admin_status).put(user::make_admin),
        )
        .route(
            "/doctors",
            get(doctor::get_doctors).post(doctor::create_doctor),
        )
        .route("/doctors/{id}", delete(doctor::delete_doctor))
        .route("/create-payment-intent", post(payment::create_payment_intent))
        .route("/payments", post(payment::record_payment))
        .route("/jwt", get(auth::issue_token))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
