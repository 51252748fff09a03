use std::sync::Arc;

use tracing::{info, instrument};

use models::device::{self, DeviceAttributes};

use crate::device::predictor::Predictor;
use crate::device::store::{DeviceDraft, DeviceStore};
use crate::errors::ServiceError;

/// Orchestrates device CRUD and the predict-and-update workflow.
/// Store and predictor are injected so tests can substitute fakes.
pub struct DeviceService {
    store: Arc<dyn DeviceStore>,
    predictor: Arc<dyn Predictor>,
}

impl DeviceService {
    pub fn new(store: Arc<dyn DeviceStore>, predictor: Arc<dyn Predictor>) -> Self {
        Self { store, predictor }
    }

    pub async fn list(&self) -> Result<Vec<device::Model>, ServiceError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<device::Model>, ServiceError> {
        self.store.find_by_id(id).await
    }

    /// Persist a caller-supplied attribute set as-is. No semantic validation;
    /// the classification starts at its default until a prediction runs.
    pub async fn add(&self, attrs: DeviceAttributes) -> Result<device::Model, ServiceError> {
        self.store.save(DeviceDraft::insert(attrs)).await
    }

    /// Run a fresh prediction for the device and write the result back.
    ///
    /// Returns `Ok(None)` when the device does not exist, both on the initial
    /// lookup and on the re-fetch before the write; an absent device is a
    /// recoverable outcome at every step, never a fatal error. The predictor
    /// response is written back verbatim, whatever integer it is.
    #[instrument(skip(self), fields(device_id = id))]
    pub async fn predict_and_update(&self, id: i64) -> Result<Option<device::Model>, ServiceError> {
        let Some(found) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        let price_range = self.predictor.predict(&found.attributes()).await?;
        info!(price_range, "predictor classified device");

        // Re-fetch for the write; the row may have gone away meanwhile.
        let Some(current) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };
        let updated = self
            .store
            .save(DeviceDraft::update(current.id, current.attributes(), price_range))
            .await?;
        Ok(Some(updated))
    }
}
