//! Dropship API Server
//!
//! Main entry point for the currency service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dropship_api::{AppState, create_router};
use dropship_core::currency::{CurrencyService, RateCache, SystemClock};
use dropship_fx::HttpRateProvider;
use dropship_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dropship=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    let rates = &config.exchange_rates;

    // Create rate provider and cache
    let provider = HttpRateProvider::from_config(rates)?;
    let ttl = i64::try_from(rates.cache_ttl_secs)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .context("exchange_rates.cache_ttl_secs is out of range")?;
    let cache = RateCache::with_config(Arc::new(SystemClock), ttl);
    info!(
        api_base_url = %rates.api_base_url,
        cache_ttl_secs = rates.cache_ttl_secs,
        "Exchange rate provider configured"
    );

    let currency = Arc::new(CurrencyService::new(Arc::new(provider), cache));

    // Warm the cache for the console's default base
    let lookup = currency.exchange_rates_detailed(&rates.prewarm_base).await;
    if lookup.source.is_real() {
        info!(
            base = %lookup.base,
            source = ?lookup.source,
            count = lookup.rates.len(),
            "Exchange rates pre-warmed"
        );
    } else {
        warn!(
            base = %lookup.base,
            "Rate API unavailable at startup, serving fallback rates until it recovers"
        );
    }

    // Create application state
    let state = AppState { currency };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
