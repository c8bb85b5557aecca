//! Payment repository.
//!
//! Recording a payment touches two collections: the payment document is
//! inserted and the referenced booking's `paid` flag is set. Both writes run
//! inside one session transaction so a payment can never exist without its
//! booking marked paid.

use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    Client, ClientSession, Collection, Database,
};

use crate::{
    data::booking,
    error::AppError,
    model::{booking::Booking, payment::Payment},
    util::parse::parse_object_id,
};

pub const COLLECTION: &str = "payments";

pub struct PaymentRepository {
    client: Client,
    payments: Collection<Payment>,
    bookings: Collection<Booking>,
}

impl PaymentRepository {
    pub fn new(client: &Client, db: &Database) -> Self {
        Self {
            client: client.clone(),
            payments: db.collection(COLLECTION),
            bookings: db.collection(booking::COLLECTION),
        }
    }

    /// Persists a payment and marks the referenced booking paid.
    ///
    /// # Returns
    /// - `Ok(id)` - Payment stored and booking updated, atomically
    /// - `Err(AppError::BadRequest)` - The payload's booking id is malformed
    /// - `Err(AppError::NotFound)` - No booking matches the payload's id
    pub async fn record(&self, payment: &Payment) -> Result<Bson, AppError> {
        let booking_id = parse_object_id(&payment.booking_id)?;

        let mut session = self.client.start_session(None).await?;
        session.start_transaction(None).await?;

        let result = self
            .record_in_session(payment, booking_id, &mut session)
            .await;

        match result {
            Ok(inserted_id) => {
                session.commit_transaction().await?;
                Ok(inserted_id)
            }
            Err(err) => {
                session.abort_transaction().await.ok();
                Err(err)
            }
        }
    }

    async fn record_in_session(
        &self,
        payment: &Payment,
        booking_id: ObjectId,
        session: &mut ClientSession,
    ) -> Result<Bson, AppError> {
        let inserted = self
            .payments
            .insert_one_with_session(payment, None, session)
            .await?;

        let updated = self
            .bookings
            .update_one_with_session(
                doc! { "_id": booking_id },
                doc! { "$set": { "paid": true } },
                None,
                session,
            )
            .await?;

        if updated.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "No booking with id {}",
                payment.booking_id
            )));
        }

        Ok(inserted.inserted_id)
    }
}
