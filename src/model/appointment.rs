//! Appointment option templates.
//!
//! An appointment option is a treatment with a price and a fixed daily slot
//! list. The stored template is immutable; availability responses carry a
//! copy with the already-booked slots removed.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Treatment template with its daily slot list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentOption {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    /// Treatment identifier, unique across the collection.
    pub name: String,
    pub price: f64,
    /// Bookable time strings in template order.
    pub slots: Vec<String>,
}

impl AppointmentOption {
    /// Returns this option with the given slot values removed, preserving
    /// the template's original slot order.
    pub fn with_remaining_slots(mut self, booked: &[&str]) -> Self {
        self.slots.retain(|slot| !booked.contains(&slot.as_str()));
        self
    }
}

/// Name-only projection of an appointment option, served by the
/// specialty listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(slots: &[&str]) -> AppointmentOption {
        AppointmentOption {
            id: None,
            name: "Braces".to_string(),
            price: 300.0,
            slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn no_booked_slots_keeps_full_template() {
        let remaining = option(&["09:00", "10:00", "11:00"]).with_remaining_slots(&[]);
        assert_eq!(remaining.slots, vec!["09:00", "10:00", "11:00"]);
    }

    #[test]
    fn booked_slots_are_removed() {
        let remaining = option(&["09:00", "10:00", "11:00"]).with_remaining_slots(&["10:00"]);
        assert_eq!(remaining.slots, vec!["09:00", "11:00"]);
    }

    #[test]
    fn template_order_is_preserved() {
        let remaining =
            option(&["11:00", "09:00", "10:00"]).with_remaining_slots(&["09:00"]);
        assert_eq!(remaining.slots, vec!["11:00", "10:00"]);
    }

    #[test]
    fn unknown_booked_slot_changes_nothing() {
        let remaining = option(&["09:00"]).with_remaining_slots(&["23:00"]);
        assert_eq!(remaining.slots, vec!["09:00"]);
    }
}
