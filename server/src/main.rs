mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "orizu server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = Config::from_env()?;

    let leptos_options = leptos::config::get_configuration(None)
        .map_err(|e| ServerError::LeptosConfig(e.to_string()))?
        .leptos_options;

    let app = routes::app(&config, leptos_options);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, compression = config.compression, "orizu listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
