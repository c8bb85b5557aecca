use mongodb::{bson::doc, options::IndexOptions, Client, Database, IndexModel};

use crate::{
    config::Config,
    data,
    error::AppError,
    model::{booking::Booking, user::User},
};

/// Name of the application database on the cluster.
pub const DB_NAME: &str = "doctorsPortal";

/// Connects to the MongoDB cluster.
///
/// The driver manages its own connection pool; the returned client is cloned
/// into the application state and shared by all handlers.
pub async fn connect_to_database(config: &Config) -> Result<Client, AppError> {
    let client = Client::with_uri_str(&config.database_url).await?;

    Ok(client)
}

/// Creates the unique indexes the API relies on.
///
/// Runs once at startup, before the listener binds. Bookings are unique per
/// (email, appointmentDate, treatment) so a duplicate reservation is rejected
/// by the store itself rather than by a racy read-before-write check; users
/// are unique per email for the same reason. Index creation is idempotent.
pub async fn ensure_indexes(db: &Database) -> Result<(), AppError> {
    let unique = || IndexOptions::builder().unique(true).build();

    db.collection::<Booking>(data::booking::COLLECTION)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1, "appointmentDate": 1, "treatment": 1 })
                .options(unique())
                .build(),
            None,
        )
        .await?;

    db.collection::<User>(data::user::COLLECTION)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique())
                .build(),
            None,
        )
        .await?;

    Ok(())
}

/// Builds the HTTP client used for payment processor requests.
///
/// Redirects are disabled; the Stripe API never redirects and following one
/// would resend the secret key to an unknown host.
pub fn setup_http_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}
