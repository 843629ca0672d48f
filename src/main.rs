use portfolio_site::app::App;
use portfolio_site::config::site_config::SiteConfig;
use portfolio_site::site;
use std::env;
use tracing::log::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    SiteConfig::load_initial();
    // Dropping the watcher stops it
    let _watcher = SiteConfig::watch()
        .inspect_err(|e| error!("Not watching site config: {e}"))
        .ok();

    let app = App::from_env()?;
    info!("Reading statistics from {}", app.api_url);

    let router = site::web::router(app);

    let ip = env::var("APP_IP").unwrap_or("0.0.0.0".to_string());
    let port = env::var("APP_PORT").unwrap_or("3000".to_string());
    let address = format!("{ip}:{port}");

    info!("Listening on {address}");

    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
