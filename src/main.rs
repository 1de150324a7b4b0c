use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recordlog::{create_router, AppState, Config, Log};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: LISTEN_ADDR (default: 0.0.0.0:8080)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting record log server");
    tracing::info!("Listen address: {}", config.listen_addr);

    // The log lives for the lifetime of the process
    let state = AppState::new(Log::new());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server running at http://{}", config.listen_addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
