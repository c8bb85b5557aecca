use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    Collection, Database,
};

use crate::{error::AppError, model::doctor::Doctor};

pub const COLLECTION: &str = "doctors";

pub struct DoctorRepository {
    collection: Collection<Doctor>,
}

impl DoctorRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Doctor>, AppError> {
        let doctors = self.collection.find(doc! {}, None).await?.try_collect().await?;

        Ok(doctors)
    }

    pub async fn insert(&self, doctor: &Doctor) -> Result<Bson, AppError> {
        let result = self.collection.insert_one(doctor, None).await?;

        Ok(result.inserted_id)
    }

    /// Deletes a doctor by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The doctor was removed
    /// - `Ok(false)` - No doctor matched the id
    pub async fn delete(&self, id: ObjectId) -> Result<bool, AppError> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;

        Ok(result.deleted_count > 0)
    }
}
