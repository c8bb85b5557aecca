//! Remaining-slot computation.
//!
//! For a date, every option template is served with the subset of its slots
//! not yet taken by a booking for that date and treatment. Two strategies
//! exist and must agree: the in-process subtraction below and the
//! aggregation pipeline in `data::appointment::find_available`.

use mongodb::Database;

use crate::{
    data::{appointment::AppointmentOptionRepository, booking::BookingRepository},
    error::AppError,
    model::{appointment::AppointmentOption, booking::Booking},
};

pub struct AvailabilityService {
    options: AppointmentOptionRepository,
    bookings: BookingRepository,
}

impl AvailabilityService {
    pub fn new(db: &Database) -> Self {
        Self {
            options: AppointmentOptionRepository::new(db),
            bookings: BookingRepository::new(db),
        }
    }

    /// Remaining slots per option for a date, computed in-process.
    ///
    /// An unknown or empty date matches no bookings, so every template is
    /// returned with its full slot list.
    pub async fn options_for_date(&self, date: &str) -> Result<Vec<AppointmentOption>, AppError> {
        let options = self.options.find_all().await?;
        let booked = self.bookings.find_by_date(date).await?;

        Ok(subtract_booked(options, &booked))
    }

    /// Remaining slots per option for a date, computed by the store.
    pub async fn options_for_date_aggregated(
        &self,
        date: &str,
    ) -> Result<Vec<AppointmentOption>, AppError> {
        self.options.find_available(date).await
    }
}

/// Removes each option's booked slot values from its template slot list.
///
/// Bookings are matched to options by treatment name; slots stay in
/// template order.
fn subtract_booked(options: Vec<AppointmentOption>, booked: &[Booking]) -> Vec<AppointmentOption> {
    options
        .into_iter()
        .map(|option| {
            let taken: Vec<&str> = booked
                .iter()
                .filter(|booking| booking.treatment == option.name)
                .map(|booking| booking.slot.as_str())
                .collect();

            option.with_remaining_slots(&taken)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str, slots: &[&str]) -> AppointmentOption {
        AppointmentOption {
            id: None,
            name: name.to_string(),
            price: 300.0,
            slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn booking(treatment: &str, slot: &str) -> Booking {
        Booking {
            id: None,
            email: "jane@example.com".to_string(),
            appointment_date: "2023-01-01".to_string(),
            treatment: treatment.to_string(),
            slot: slot.to_string(),
            paid: false,
        }
    }

    #[test]
    fn no_bookings_leaves_every_template_full() {
        let options = vec![
            option("Braces", &["09:00", "10:00"]),
            option("Cleaning", &["08:00"]),
        ];

        let remaining = subtract_booked(options, &[]);

        assert_eq!(remaining[0].slots, vec!["09:00", "10:00"]);
        assert_eq!(remaining[1].slots, vec!["08:00"]);
    }

    #[test]
    fn booked_slot_disappears_from_its_treatment() {
        let options = vec![option("Braces", &["09:00", "10:00"])];
        let booked = vec![booking("Braces", "09:00")];

        let remaining = subtract_booked(options, &booked);

        assert_eq!(remaining[0].slots, vec!["10:00"]);
    }

    #[test]
    fn booking_for_one_treatment_does_not_affect_another() {
        let options = vec![
            option("Braces", &["09:00"]),
            option("Cleaning", &["09:00"]),
        ];
        let booked = vec![booking("Braces", "09:00")];

        let remaining = subtract_booked(options, &booked);

        assert!(remaining[0].slots.is_empty());
        assert_eq!(remaining[1].slots, vec!["09:00"]);
    }

    #[test]
    fn fully_booked_option_has_no_remaining_slots() {
        let options = vec![option("Braces", &["09:00", "10:00"])];
        let booked = vec![booking("Braces", "09:00"), booking("Braces", "10:00")];

        let remaining = subtract_booked(options, &booked);

        assert!(remaining[0].slots.is_empty());
    }

    #[test]
    fn price_and_name_survive_the_subtraction() {
        let options = vec![option("Braces", &["09:00"])];
        let booked = vec![booking("Braces", "09:00")];

        let remaining = subtract_booked(options, &booked);

        assert_eq!(remaining[0].name, "Braces");
        assert_eq!(remaining[0].price, 300.0);
    }
}
