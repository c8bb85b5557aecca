use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    Collection, Database,
};

use crate::{data::is_duplicate_key, error::AppError, model::booking::Booking};

pub const COLLECTION: &str = "bookings";

pub struct BookingRepository {
    collection: Collection<Booking>,
}

impl BookingRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Returns every booking made by one user.
    pub async fn find_by_email(&self, email: &str) -> Result<Vec<Booking>, AppError> {
        let bookings = self
            .collection
            .find(doc! { "email": email }, None)
            .await?
            .try_collect()
            .await?;

        Ok(bookings)
    }

    /// Returns every booking for one appointment date, all treatments.
    pub async fn find_by_date(&self, date: &str) -> Result<Vec<Booking>, AppError> {
        let bookings = self
            .collection
            .find(doc! { "appointmentDate": date }, None)
            .await?
            .try_collect()
            .await?;

        Ok(bookings)
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Booking>, AppError> {
        let booking = self.collection.find_one(doc! { "_id": id }, None).await?;

        Ok(booking)
    }

    /// Inserts a booking through the unique (email, appointmentDate, treatment)
    /// index.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - Booking created
    /// - `Ok(None)` - An identical reservation already exists
    /// - `Err(AppError)` - Any other database failure
    pub async fn insert(&self, booking: &Booking) -> Result<Option<Bson>, AppError> {
        match self.collection.insert_one(booking, None).await {
            Ok(result) => Ok(Some(result.inserted_id)),
            Err(err) if is_duplicate_key(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
