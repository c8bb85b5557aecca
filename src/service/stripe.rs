//! Payment processor bridge.
//!
//! Creates payment intents against the Stripe REST API. The service only
//! performs step one of the payment flow; confirmation happens client-side
//! with the returned secret, and the result is recorded via `POST /payments`.

use serde::Deserialize;

use crate::error::AppError;

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

/// Prices are stored in whole currency units with two decimal places.
const MINOR_UNITS_PER_UNIT: f64 = 100.0;

const CURRENCY: &str = "usd";

/// Payment intent as returned by the processor. Only the fields the API
/// serves onward are deserialized.
#[derive(Debug, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

pub struct StripeService<'a> {
    http_client: &'a reqwest::Client,
    secret_key: &'a str,
}

impl<'a> StripeService<'a> {
    pub fn new(http_client: &'a reqwest::Client, secret_key: &'a str) -> Self {
        Self {
            http_client,
            secret_key,
        }
    }

    /// Creates a card-only payment intent for the given price.
    pub async fn create_payment_intent(&self, price: f64) -> Result<PaymentIntent, AppError> {
        let amount = to_minor_units(price);
        let params = [
            ("amount", amount.to_string()),
            ("currency", CURRENCY.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .http_client
            .post(PAYMENT_INTENTS_URL)
            .bearer_auth(self.secret_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::PaymentBridge(format!("{status}: {body}")));
        }

        let intent = response.json().await?;

        Ok(intent)
    }
}

/// Converts a price in whole currency units to the processor's minor units.
fn to_minor_units(price: f64) -> i64 {
    (price * MINOR_UNITS_PER_UNIT).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_prices_convert_to_cents() {
        assert_eq!(to_minor_units(300.0), 30000);
    }

    #[test]
    fn fractional_prices_round_to_the_nearest_cent() {
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(0.1), 10);
    }

    #[test]
    fn float_representation_noise_does_not_drop_a_cent() {
        // 29.98 * 100.0 is 2997.9999... in f64
        assert_eq!(to_minor_units(29.98), 2998);
    }
}
