use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    Collection, Database,
};

use crate::{
    data::is_duplicate_key,
    error::AppError,
    model::user::{User, ADMIN_ROLE},
};

pub const COLLECTION: &str = "users";

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let users = self.collection.find(doc! {}, None).await?.try_collect().await?;

        Ok(users)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = self
            .collection
            .find_one(doc! { "email": email }, None)
            .await?;

        Ok(user)
    }

    /// Inserts a user through the unique email index.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - User created
    /// - `Ok(None)` - The email is already registered
    /// - `Err(AppError)` - Any other database failure
    pub async fn insert(&self, user: &User) -> Result<Option<Bson>, AppError> {
        match self.collection.insert_one(user, None).await {
            Ok(result) => Ok(Some(result.inserted_id)),
            Err(err) if is_duplicate_key(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Sets the admin role on an existing user.
    ///
    /// Plain conditional update, never an upsert: promoting an id that does
    /// not exist must not create a document.
    ///
    /// # Returns
    /// - `Ok(true)` - The user's role is now "admin"
    /// - `Ok(false)` - No user matched the id
    pub async fn promote_to_admin(&self, id: ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "role": ADMIN_ROLE } },
                None,
            )
            .await?;

        Ok(result.matched_count > 0)
    }
}
