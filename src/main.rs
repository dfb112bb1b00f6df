use anyhow::Context;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::settings::AppConfig;
use crate::infrastructure::db::pool::{connect_to_db, run_migrations};
use crate::modules::genre::repository::PgGenreRepository;
use crate::modules::movie::repository::PgMovieRepository;
use crate::state::AppState;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting server...");

    let config = AppConfig::new().context("Invalid configuration")?;

    let pool = connect_to_db(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let state = AppState::new(
        config.clone(),
        Arc::new(PgMovieRepository::new(pool.clone())),
        Arc::new(PgGenreRepository::new(pool)),
    );
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
