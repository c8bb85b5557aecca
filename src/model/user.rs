use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Role value that grants access to admin-only routes.
pub const ADMIN_ROLE: &str = "admin";

/// Application user, created on first login.
///
/// `role` is absent for regular users and `"admin"` for administrators;
/// there are no other roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<&str>) -> User {
        User {
            id: None,
            name: Some("Jane".to_string()),
            email: "jane@example.com".to_string(),
            role: role.map(|r| r.to_string()),
        }
    }

    #[test]
    fn admin_role_grants_admin() {
        assert!(user(Some("admin")).is_admin());
    }

    #[test]
    fn absent_role_is_not_admin() {
        assert!(!user(None).is_admin());
    }

    #[test]
    fn other_role_is_not_admin() {
        assert!(!user(Some("doctor")).is_admin());
    }

    #[test]
    fn deserializes_signup_payload_without_role() {
        let user: User =
            serde_json::from_str(r#"{"name": "Jane", "email": "jane@example.com"}"#).unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert!(user.role.is_none());
        assert!(!user.is_admin());
    }
}
