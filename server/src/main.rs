mod config;
mod error;
mod routes;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    // A missing .env is normal; a broken one is worth a warning.
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            tracing::warn!(error = %err, "failed to load .env");
        }
    }

    let config = ServerConfig::from_env()?;
    let leptos_options = routes::leptos_options()?;
    let app = routes::app(leptos_options);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "devfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
