use crate::config::AppConfig;
use crate::directory::{spawn_initial_load, ApiClient, Directory};
use crate::domain::fallback::generate_fallback_firms;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod directory;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lawyer_directory=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Fallback directory, served until live data arrives
    let directory = Arc::new(Directory::new(generate_fallback_firms()));
    tracing::info!(
        fallback = directory.fallback().len(),
        "fallback directory ready"
    );

    // 3️⃣ One background fetch of live lawyers
    match ApiClient::new(&config.api_base, config.fetch_timeout) {
        Ok(client) => {
            tracing::info!(url = %client.lawyers_url(), "fetching live lawyers");
            // Detached: the server never waits on it.
            let _ = spawn_initial_load(Arc::clone(&directory), client);
        }
        Err(e) => tracing::warn!(error = %e, "live lawyers unavailable, serving fallback only"),
    }

    // 4️⃣ Start the server
    tracing::info!("Starting server at http://{}", config.bind_addr);
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &directory) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
