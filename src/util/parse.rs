use mongodb::bson::oid::ObjectId;

use crate::error::AppError;

/// Parses a hex document id from a path or payload value.
///
/// # Returns
/// - `Ok(ObjectId)` - Successfully parsed the 24-character hex id
/// - `Err(AppError::BadRequest)` - The value is not a valid document id
pub fn parse_object_id(value: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value)
        .map_err(|_| AppError::BadRequest(format!("Invalid document id '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_hex_id() {
        let id = parse_object_id("64b0c0ffee0ddba11ad0beef").unwrap();
        assert_eq!(id.to_hex(), "64b0c0ffee0ddba11ad0beef");
    }

    #[test]
    fn rejects_malformed_id() {
        let err = parse_object_id("not-an-id").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
