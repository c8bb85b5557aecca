use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use mongodb::Database;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
    state::AppState,
};

pub enum Permission {
    Admin,
}

/// Identity established from a bearer token, valid for one request.
///
/// Extracting it rejects the request with 401 when no `Authorization`
/// header is present and 403 when the token fails verification, so a
/// handler taking `Identity` is a protected route.
pub struct Identity {
    pub email: String,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingCredentials)?;

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::InvalidToken)?;

        let claims = TokenService::new(&state.access_token_secret).verify(token)?;

        Ok(Identity {
            email: claims.email,
        })
    }
}

pub struct AuthGuard<'a> {
    db: &'a Database,
    identity: &'a Identity,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a Database, identity: &'a Identity) -> Self {
        Self { db, identity }
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        // An identity with no user record holds no permissions; absence is
        // an explicit denial, not a fault.
        let Some(user) = user_repo.find_by_email(&self.identity.email).await? else {
            return Err(AuthError::AccessDenied(self.identity.email.clone()).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(self.identity.email.clone()).into());
                    }
                }
            }
        }

        Ok(user)
    }
}
