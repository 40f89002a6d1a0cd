mod config;
mod db;
mod errors;
mod interests;
mod matching;
mod models;
mod quiz;
mod routes;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{
    CachedProfileStore, MemoryProfileStore, PgProfileStore, ProfileStore, RedisQuizCache,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Aether API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;

    let state = AppState { store };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the authoritative store from config and wraps it in the Redis cache if configured.
async fn build_store(config: &Config) -> Result<Arc<dyn ProfileStore>> {
    let base: Arc<dyn ProfileStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Arc::new(PgProfileStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; profiles are kept in memory and lost on restart");
            Arc::new(MemoryProfileStore::new())
        }
    };

    let Some(redis_url) = &config.redis_url else {
        return Ok(base);
    };

    let redis = redis::Client::open(redis_url.as_str()).context("REDIS_URL is not a valid Redis URL")?;
    info!(
        ttl_secs = config.quiz_cache_ttl_secs,
        "Redis quiz result cache enabled"
    );
    let cache = Arc::new(RedisQuizCache::new(redis, config.quiz_cache_ttl_secs));
    Ok(Arc::new(CachedProfileStore::new(base, cache)))
}
