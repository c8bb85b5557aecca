mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let client = startup::connect_to_database(&config).await?;
    let db = client.database(startup::DB_NAME);
    startup::ensure_indexes(&db).await?;

    let http_client = startup::setup_http_client()?;

    let state = AppState::new(
        client,
        db,
        http_client,
        config.access_token_secret.clone(),
        config.stripe_secret_key.clone(),
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Doctors portal server is running on port {}", config.port);

    axum::serve(listener, router::router(state)).await?;

    Ok(())
}
