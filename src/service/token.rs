use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{auth::AuthError, AppError};

/// Issued tokens stay valid this long. The companion front-end stores the
/// token in local storage and has no refresh flow.
const TOKEN_TTL_DAYS: i64 = 30;

/// Claims carried by a bearer token: the holder's email and expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub exp: usize,
}

/// Signs and verifies HS256 bearer tokens against the configured secret.
pub struct TokenService<'a> {
    secret: &'a str,
}

impl<'a> TokenService<'a> {
    pub fn new(secret: &'a str) -> Self {
        Self { secret }
    }

    pub fn issue(&self, email: &str) -> Result<String, AppError> {
        let exp = (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
        let claims = Claims {
            email: email.to_string(),
            exp,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verifies signature and expiry, returning the claims on success.
    ///
    /// Every verification failure collapses to `InvalidToken`; the caller
    /// never learns whether the signature or the expiry was at fault.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_decodes_to_the_same_email() {
        let service = TokenService::new(SECRET);

        let token = service.issue("jane@example.com").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.email, "jane@example.com");
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = TokenService::new("other-secret")
            .issue("jane@example.com")
            .unwrap();

        let result = TokenService::new(SECRET).verify(&token);

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Signed with the right secret but an expiry beyond the default
        // validation leeway.
        let exp = (Utc::now() - Duration::hours(1)).timestamp() as usize;
        let claims = Claims {
            email: "jane@example.com".to_string(),
            exp,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = TokenService::new(SECRET).verify(&token);

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let result = TokenService::new(SECRET).verify("not-a-token");

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
