//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: the Mongo `Client` and `Database` handles share one connection
//! pool, and `reqwest::Client` uses an `Arc` internally.

use mongodb::{Client, Database};

/// Shared resources and secrets injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// MongoDB client, needed directly for session transactions.
    pub client: Client,

    /// Handle on the application database; repositories are built from it.
    pub db: Database,

    /// HTTP client for payment processor requests.
    pub http_client: reqwest::Client,

    /// HS256 secret used to sign and verify bearer tokens.
    pub access_token_secret: String,

    /// Secret API key for the payment processor.
    pub stripe_secret_key: String,
}

impl AppState {
    pub fn new(
        client: Client,
        db: Database,
        http_client: reqwest::Client,
        access_token_secret: String,
        stripe_secret_key: String,
    ) -> Self {
        Self {
            client,
            db,
            http_client,
            access_token_secret,
            stripe_secret_key,
        }
    }
}
