use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Doctor record managed by admins.
///
/// The core never interprets these fields; they are stored and served
/// verbatim for the management UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    /// Treatment name the doctor covers.
    pub specialty: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
}
