mod error;
mod handlers;
mod middlewares;
mod models;
mod routes;

use anyhow::Context;
use food_donations::DatabaseConfig;
use sqlx::PgPool;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = match dotenvy::var("PORT") {
        Ok(port) => port.parse().context("PORT is not a valid port number")?,
        Err(_) => DEFAULT_PORT,
    };

    let config = DatabaseConfig::from_env().context("invalid database configuration")?;
    let db = food_donations::db::connect_lazy(&config)?;

    // pages render their own database errors, so a server that is down at
    // startup only warrants a warning
    match food_donations::db::ping(&db).await {
        Ok(()) => tracing::info!("connected to the database"),
        Err(e) => tracing::warn!(error = %e, "database is not reachable yet"),
    }

    let app = routes::app(AppState { db });

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
