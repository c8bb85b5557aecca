//! Appointment option repository.
//!
//! Serves the option templates and the store-side availability aggregation.
//! The aggregation must produce the same remaining-slot sets as the
//! in-process calculation in `service::availability`; both subtract the
//! booked slot values for the requested date from each template.

use futures::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, Document},
    options::FindOptions,
    Collection, Database,
};

use crate::{
    data::booking,
    error::AppError,
    model::appointment::{AppointmentOption, Specialty},
};

pub const COLLECTION: &str = "appointmentOptions";

pub struct AppointmentOptionRepository {
    collection: Collection<AppointmentOption>,
}

impl AppointmentOptionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Returns every option template, slots untouched.
    pub async fn find_all(&self) -> Result<Vec<AppointmentOption>, AppError> {
        let options = self.collection.find(doc! {}, None).await?.try_collect().await?;

        Ok(options)
    }

    /// Returns the name-only projection of every option.
    pub async fn find_specialties(&self) -> Result<Vec<Specialty>, AppError> {
        let find_options = FindOptions::builder()
            .projection(doc! { "name": 1 })
            .build();

        let specialties = self
            .collection
            .clone_with_type::<Specialty>()
            .find(doc! {}, find_options)
            .await?
            .try_collect()
            .await?;

        Ok(specialties)
    }

    /// Computes remaining slots per option for a date on the store side.
    ///
    /// Joins each template against the bookings made for the date and
    /// subtracts the booked slot values in a single aggregation.
    pub async fn find_available(&self, date: &str) -> Result<Vec<AppointmentOption>, AppError> {
        let documents: Vec<Document> = self
            .collection
            .aggregate(availability_pipeline(date), None)
            .await?
            .try_collect()
            .await?;

        let options = documents
            .into_iter()
            .map(from_document)
            .collect::<Result<Vec<AppointmentOption>, _>>()?;

        Ok(options)
    }
}

fn availability_pipeline(date: &str) -> Vec<Document> {
    vec![
        doc! {
            "$lookup": {
                "from": booking::COLLECTION,
                "localField": "name",
                "foreignField": "treatment",
                "pipeline": [
                    { "$match": { "$expr": { "$eq": ["$appointmentDate", date] } } }
                ],
                "as": "booked",
            }
        },
        doc! {
            "$project": {
                "name": 1,
                "price": 1,
                "slots": 1,
                "booked": {
                    "$map": {
                        "input": "$booked",
                        "as": "book",
                        "in": "$$book.slot",
                    }
                },
            }
        },
        doc! {
            "$project": {
                "name": 1,
                "price": 1,
                "slots": { "$setDifference": ["$slots", "$booked"] },
            }
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_joins_bookings_for_the_requested_date() {
        let pipeline = availability_pipeline("2023-01-01");
        assert_eq!(pipeline.len(), 3);

        let lookup = pipeline[0].get_document("$lookup").unwrap();
        assert_eq!(lookup.get_str("from").unwrap(), "bookings");
        assert_eq!(lookup.get_str("localField").unwrap(), "name");
        assert_eq!(lookup.get_str("foreignField").unwrap(), "treatment");

        let date_match = lookup.get_array("pipeline").unwrap()[0]
            .as_document()
            .unwrap()
            .get_document("$match")
            .unwrap()
            .get_document("$expr")
            .unwrap();
        let operands = date_match.get_array("$eq").unwrap();
        assert_eq!(operands[0].as_str().unwrap(), "$appointmentDate");
        assert_eq!(operands[1].as_str().unwrap(), "2023-01-01");
    }

    #[test]
    fn pipeline_subtracts_booked_slots() {
        let pipeline = availability_pipeline("2023-01-01");

        let final_slots = pipeline[2]
            .get_document("$project")
            .unwrap()
            .get_document("slots")
            .unwrap();
        let operands = final_slots.get_array("$setDifference").unwrap();
        assert_eq!(operands[0].as_str().unwrap(), "$slots");
        assert_eq!(operands[1].as_str().unwrap(), "$booked");
    }
}
