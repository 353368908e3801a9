//! # EcoRahi Backend
//!
//! REST backend for the EcoRahi Jharkhand tourism app: a destination catalog
//! with search/filter, plus reviews and a marketplace of local services.
//!
//! # General Infrastructure
//! - Single axum server, all endpoints under `/api`
//! - Catalog lives behind the [`storage::Storage`] trait; the backend
//!   (in-memory or SQLite) is chosen once at start-up from configuration
//! - All destination filtering goes through [`search::filter_destinations`],
//!   never through the backends themselves
//!
//! # Endpoints
//! - `POST /api/search` - filter destinations by query/category/budget/duration/travel style
//! - `GET /api/destinations` - list, with optional query/category narrowing
//! - `GET /api/destinations/{id}` - single destination
//! - `GET /api/reviews` - all reviews or one destination's
//! - `GET /api/services` - marketplace services, optionally by category
//!
//! # Setup
//!
//! ```sh
//! ECORAHI_PORT=5000 cargo run
//! ```
//!
//! Switch to SQLite with `ECORAHI_STORAGE=database` and a `DATABASE_URL`.
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};

use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod search;
pub mod seed;
pub mod state;
pub mod storage;

use routes::{
    destination_handler, destinations_handler, reviews_handler, search_handler, services_handler,
};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/api/search", post(search_handler))
        .route("/api/destinations", get(destinations_handler))
        .route("/api/destinations/{id}", get(destination_handler))
        .route("/api/reviews", get(reviews_handler))
        .route("/api/services", get(services_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
