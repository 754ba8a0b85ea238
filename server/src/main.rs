//! Movie catalog server.
//!
//! Run from repo root: `cargo run -p movie-catalog-server`
//! Without `DATABASE_URL` the API runs on an in-memory store.

use movie_catalog::{
    app, apply_seed, ensure_database_exists, ensure_tables, load_seed, AppState, MemoryStore, PgStore,
    ServerConfig, Store,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("movie_catalog=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let store: Arc<dyn Store> = match &config.database_url {
        Some(database_url) => {
            ensure_database_exists(database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;
            ensure_tables(&pool).await?;
            Arc::new(PgStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory store, data is lost on exit");
            Arc::new(MemoryStore::new())
        }
    };

    if let Some(dir) = &config.seed_path {
        let seed = load_seed(dir).await?;
        apply_seed(store.as_ref(), &seed).await?;
    }

    let router = app(AppState::new(store), &config);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("movie catalog listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
