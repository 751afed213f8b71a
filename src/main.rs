// region:    --- Imports
use anyhow::Context;
use govdeals_tracker::config::Config;
use govdeals_tracker::handlers;
use govdeals_tracker::store;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    info!("{:<12} --> config: {:?}", "Main", config);

    // store selected by LISTINGS_BACKEND
    let listing_store = match store::open_store(&config.store).await {
        Ok(listing_store) => listing_store,
        Err(e) => {
            error!("{:<12} --> listing store unavailable: {}", "Main", e);
            return Err(e.into());
        }
    };
    info!("{:<12} --> listing store ready", "Main");

    let routes_all = handlers::router(listing_store);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
