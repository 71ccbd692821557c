mod config;
mod error;
mod routes;

use std::process::ExitCode;

use gochi_web::config::BackendBase;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "gochi-server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    config::load_dotenv();
    let config = ServerConfig::from_env()?;

    let app = routes::app()?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let backend = BackendBase::from_build_env();
    tracing::info!(%addr, backend = backend.as_str(), "gochi-server listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
