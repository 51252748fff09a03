use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use common::utils::logging::init_logging_default;
use service::device::{DeviceService, HttpPredictor, SeaOrmDeviceStore};

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Predictor endpoint from configs or PREDICTOR_URL, defaulting to the
/// local ML service.
fn load_predictor_url() -> String {
    match configs::load_default() {
        Ok(cfg) => {
            let mut p = cfg.predictor;
            p.normalize_from_env();
            p.url
        }
        Err(_) => env::var("PREDICTOR_URL")
            .unwrap_or_else(|_| "http://localhost:5000/predict".to_string()),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // DB connection and schema
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let predictor_url = load_predictor_url();
    info!(%predictor_url, "using predictor endpoint");

    let store = Arc::new(SeaOrmDeviceStore::new(db));
    let predictor = Arc::new(HttpPredictor::new(predictor_url));
    let state = ServerState {
        devices: Arc::new(DeviceService::new(store, predictor)),
    };

    // Build router
    let app: Router = routes::build_router(build_cors(), state);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting device price service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
