use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::task;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cineseat::{config::Config, controllers, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CineSeat API");

    // Create the shared application state (in-memory mock stores, seeded)
    let state = AppState::new(config.clone());
    info!("Mock stores seeded");

    // --- Start background tasks ---

    // Task to sweep idle booking sessions every minute
    let sweeper_state = state.clone();
    task::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let swept = sweeper_state.sessions.sweep_expired().await;
            if swept > 0 {
                info!("🧹 Swept {} idle booking sessions", swept);
            }
        }
    });

    // --- Start the web server ---

    let app = Router::new()
        .route("/", get(|| async { "CineSeat API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        // Mount the routes from the controllers module
        .nest("/api", controllers::routes())
        // Pass the application state to the router
        .with_state(state.clone())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.app.port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
