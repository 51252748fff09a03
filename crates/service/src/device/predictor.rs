use async_trait::async_trait;
use tracing::debug;

use models::device::DeviceAttributes;

use crate::errors::ServiceError;

/// Price-range predictor seam. The production implementation talks to the
/// external ML service; tests substitute stubs.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, attrs: &DeviceAttributes) -> Result<i32, ServiceError>;
}

/// HTTP client for the external predictor. POSTs the attribute set as JSON
/// and expects a single JSON integer back. No retries, no timeout.
pub struct HttpPredictor {
    client: reqwest::Client,
    url: String,
}

impl HttpPredictor {
    pub fn new(url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), url: url.into() }
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, attrs: &DeviceAttributes) -> Result<i32, ServiceError> {
        debug!(url = %self.url, "dispatching prediction request");
        let resp = self
            .client
            .post(&self.url)
            .json(attrs)
            .send()
            .await
            .map_err(|e| ServiceError::Predictor(e.to_string()))?
            .error_for_status()
            .map_err(|e| ServiceError::Predictor(e.to_string()))?;
        let price_range = resp
            .json::<i32>()
            .await
            .map_err(|e| ServiceError::Predictor(format!("non-integer response: {}", e)))?;
        Ok(price_range)
    }
}
