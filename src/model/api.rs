use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// Body of known rejections and error responses.
#[derive(Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

/// Acknowledgement for document inserts.
///
/// Mirrors the driver acknowledgement the front-end already consumes:
/// `acknowledged` plus the new document id on success, or a rejection
/// message with `acknowledged: false`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAckDto {
    pub acknowledged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted_id: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InsertAckDto {
    pub fn created(inserted_id: Bson) -> Self {
        Self {
            acknowledged: true,
            inserted_id: Some(inserted_id),
            message: None,
        }
    }

    pub fn rejected(message: String) -> Self {
        Self {
            acknowledged: false,
            inserted_id: None,
            message: Some(message),
        }
    }
}

/// Bearer token issued by `GET /jwt`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDto {
    pub access_token: String,
}

/// Admin check result for `GET /users/admin/{email}`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatusDto {
    pub is_admin: bool,
}

/// Client-side confirmation secret for a created payment intent.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentDto {
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_ack_serializes_in_camel_case() {
        let ack = InsertAckDto::created(Bson::String("abc".to_string()));
        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(value["acknowledged"], true);
        assert_eq!(value["insertedId"], "abc");
        assert!(value.get("message").is_none());
    }

    #[test]
    fn rejected_ack_carries_message_only() {
        let ack = InsertAckDto::rejected("already booked".to_string());
        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(value["acknowledged"], false);
        assert_eq!(value["message"], "already booked");
        assert!(value.get("insertedId").is_none());
    }

    #[test]
    fn token_dto_uses_access_token_key() {
        let value = serde_json::to_value(TokenDto {
            access_token: "tok".to_string(),
        })
        .unwrap();
        assert_eq!(value["accessToken"], "tok");
    }

    #[test]
    fn admin_status_uses_is_admin_key() {
        let value = serde_json::to_value(AdminStatusDto { is_admin: true }).unwrap();
        assert_eq!(value["isAdmin"], true);
    }

    #[test]
    fn payment_intent_uses_client_secret_key() {
        let value = serde_json::to_value(PaymentIntentDto {
            client_secret: "pi_secret".to_string(),
        })
        .unwrap();
        assert_eq!(value["clientSecret"], "pi_secret");
    }
}
