use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};

use ojgate::logging::init_tracing;
use ojgate::ojgate_config::ServerConfig;
use ojgate::router::init_router;
use ojgate::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = init_app_state();
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let addr = server_config.bind_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "Server running");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }

    info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
