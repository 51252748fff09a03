use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use models::device::{self, DeviceAttributes};
use server::routes::{self, ServerState};
use service::device::{DeviceService, InMemoryDeviceStore, Predictor};
use service::errors::ServiceError;

/// Predictor stub answering a fixed classification and counting invocations.
struct FixedPredictor {
    response: i32,
    calls: AtomicUsize,
}

impl FixedPredictor {
    fn returning(response: i32) -> Arc<Self> {
        Arc::new(Self { response, calls: AtomicUsize::new(0) })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Predictor for FixedPredictor {
    async fn predict(&self, _attrs: &DeviceAttributes) -> Result<i32, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response)
    }
}

struct TestApp {
    base_url: String,
}

async fn start_app(predictor: Arc<FixedPredictor>) -> anyhow::Result<TestApp> {
    let state = ServerState {
        devices: Arc::new(DeviceService::new(
            Arc::new(InMemoryDeviceStore::new()),
            predictor,
        )),
    };
    let app = routes::build_router(CorsLayer::very_permissive(), state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url: format!("http://{}", addr) })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn all_zero_payload() -> serde_json::Value {
    json!({
        "battery_power": 0, "blue": false, "clock_speed": 0.0, "dual_sim": false,
        "fc": 0, "four_g": false, "int_memory": 0, "m_dep": 0.0, "mobile_wt": 0,
        "n_cores": 0, "pc": 0, "px_height": 0, "px_width": 0, "ram": 0,
        "sc_h": 0, "sc_w": 0, "talk_time": 0, "three_g": false,
        "touch_screen": false, "wifi": false
    })
}

#[tokio::test]
async fn health_is_public() -> anyhow::Result<()> {
    let app = start_app(FixedPredictor::returning(0)).await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn create_fetch_predict_round_trip() -> anyhow::Result<()> {
    let predictor = FixedPredictor::returning(2);
    let app = start_app(predictor.clone()).await?;
    let client = client();

    // Create an all-zero device
    let created: device::Model = client
        .post(format!("{}/devices", app.base_url))
        .json(&all_zero_payload())
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert!(created.id >= 1);
    assert_eq!(created.price_range, 0);
    assert_eq!(created.attributes(), DeviceAttributes::default());

    // Fetch it back unchanged
    let fetched: device::Model = client
        .get(format!("{}/devices/{}", app.base_url, created.id))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(fetched, created);

    // Predict: classification becomes 2, everything else untouched
    let predicted: device::Model = client
        .post(format!("{}/devices/predict/{}", app.base_url, created.id))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(predicted.id, created.id);
    assert_eq!(predicted.price_range, 2);
    assert_eq!(predicted.attributes(), created.attributes());
    assert_eq!(predictor.calls(), 1);

    Ok(())
}

#[tokio::test]
async fn predict_unknown_device_is_404_and_never_calls_predictor() -> anyhow::Result<()> {
    let predictor = FixedPredictor::returning(2);
    let app = start_app(predictor.clone()).await?;

    let res = client()
        .post(format!("{}/devices/predict/9999", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(predictor.calls(), 0);

    Ok(())
}

#[tokio::test]
async fn get_unknown_device_is_404() -> anyhow::Result<()> {
    let app = start_app(FixedPredictor::returning(0)).await?;
    let res = client()
        .get(format!("{}/devices/123456", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn list_returns_each_created_device() -> anyhow::Result<()> {
    let app = start_app(FixedPredictor::returning(0)).await?;
    let client = client();

    for ram in [512, 1024, 2048] {
        client
            .post(format!("{}/devices", app.base_url))
            .json(&json!({ "ram": ram }))
            .send()
            .await?
            .error_for_status()?;
    }

    let all: Vec<device::Model> = client
        .get(format!("{}/devices", app.base_url))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(all.len(), 3);

    let mut ids: Vec<i64> = all.iter().map(|d| d.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    Ok(())
}

#[tokio::test]
async fn create_accepts_partial_payload_with_defaults() -> anyhow::Result<()> {
    let app = start_app(FixedPredictor::returning(0)).await?;

    let created: device::Model = client()
        .post(format!("{}/devices", app.base_url))
        .json(&json!({ "ram": 4096, "wifi": true }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(created.ram, 4096);
    assert!(created.wifi);
    assert_eq!(created.battery_power, 0);

    Ok(())
}
