mod config;
mod page;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "storefront exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), config::HostError> {
    let config = config::HostConfig::from_env()?;
    let port = config.port;
    tracing::info!(static_dir = %config.static_dir.display(), shop_root = %config.shop_root, "host configured");

    let app = routes::app(routes::AppState::new(config));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "storefront listening");
    axum::serve(listener, app).await?;
    Ok(())
}
