use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Completed payment as confirmed client-side, persisted once and never
/// mutated. Recording a payment marks the referenced booking paid within
/// the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    /// Hex id of the booking this payment settles.
    pub booking_id: String,
    pub email: String,
    pub price: f64,
    /// Payment processor transaction id.
    pub transaction_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_confirmation_payload() {
        let payment: Payment = serde_json::from_str(
            r#"{
                "bookingId": "64b0c0ffee0ddba11ad0beef",
                "email": "jane@example.com",
                "price": 300.0,
                "transactionId": "pi_3NqG2d"
            }"#,
        )
        .unwrap();

        assert_eq!(payment.booking_id, "64b0c0ffee0ddba11ad0beef");
        assert_eq!(payment.transaction_id, "pi_3NqG2d");
        assert!(payment.id.is_none());
    }
}
