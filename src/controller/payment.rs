use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use crate::{
    data::payment::PaymentRepository,
    error::AppError,
    model::{
        api::{InsertAckDto, PaymentIntentDto},
        payment::Payment,
    },
    service::stripe::StripeService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreatePaymentIntentBody {
    pub price: f64,
}

/// POST /create-payment-intent - Open a payment intent with the processor
///
/// Nothing is persisted here; the returned secret lets the client confirm
/// the charge, after which it calls `POST /payments`.
///
/// # Returns
/// - `200 OK`: `{clientSecret}`
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(body): Json<CreatePaymentIntentBody>,
) -> Result<impl IntoResponse, AppError> {
    let stripe = StripeService::new(&state.http_client, &state.stripe_secret_key);
    let intent = stripe.create_payment_intent(body.price).await?;

    Ok((
        StatusCode::OK,
        Json(PaymentIntentDto {
            client_secret: intent.client_secret,
        }),
    ))
}

/// POST /payments - Record a confirmed payment
///
/// Inserts the payment and marks the referenced booking paid in one
/// transaction.
///
/// # Returns
/// - `200 OK`: `{acknowledged: true, insertedId}`
/// - `400 Bad Request`: Malformed booking id in the payload
/// - `404 Not Found`: The payload references a booking that does not exist
pub async fn record_payment(
    State(state): State<AppState>,
    Json(payment): Json<Payment>,
) -> Result<impl IntoResponse, AppError> {
    let payment_repo = PaymentRepository::new(&state.client, &state.db);
    let inserted_id = payment_repo.record(&payment).await?;

    Ok((StatusCode::OK, Json(InsertAckDto::created(inserted_id))))
}
