use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Reservation of one slot, for one treatment, on one date, by one user.
///
/// Uniqueness per (email, appointmentDate, treatment) is enforced by a
/// unique compound index created at startup. `paid` flips to true exactly
/// once, inside the payment transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub email: String,
    /// Date string as sent by the front-end, e.g. "2023-01-01".
    pub appointment_date: String,
    /// References `AppointmentOption::name`.
    pub treatment: String,
    pub slot: String,
    #[serde(default)]
    pub paid: bool,
}
