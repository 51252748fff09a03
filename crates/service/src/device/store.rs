use std::collections::BTreeMap;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tokio::sync::Mutex;

use models::device::{self, Entity as DeviceEntity};

use crate::errors::ServiceError;

/// A device about to be written: `id: None` inserts under a store-assigned
/// identifier, `id: Some(_)` updates the existing row.
#[derive(Clone, Debug)]
pub struct DeviceDraft {
    pub id: Option<i64>,
    pub attributes: device::DeviceAttributes,
    pub price_range: i32,
}

impl DeviceDraft {
    /// Draft for a brand-new device; classification starts at its default.
    pub fn insert(attributes: device::DeviceAttributes) -> Self {
        Self { id: None, attributes, price_range: 0 }
    }

    /// Draft overwriting an existing row, typically with a fresh prediction.
    pub fn update(id: i64, attributes: device::DeviceAttributes, price_range: i32) -> Self {
        Self { id: Some(id), attributes, price_range }
    }
}

#[async_trait]
pub trait DeviceStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<device::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<device::Model>, ServiceError>;
    async fn save(&self, draft: DeviceDraft) -> Result<device::Model, ServiceError>;
}

/// SeaORM-backed store implementation.
pub struct SeaOrmDeviceStore {
    db: DatabaseConnection,
}

impl SeaOrmDeviceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DeviceStore for SeaOrmDeviceStore {
    async fn find_all(&self) -> Result<Vec<device::Model>, ServiceError> {
        let rows = DeviceEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<device::Model>, ServiceError> {
        let found = DeviceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found)
    }

    async fn save(&self, draft: DeviceDraft) -> Result<device::Model, ServiceError> {
        match draft.id {
            None => {
                let am = device::active_model_from(&draft.attributes, draft.price_range);
                am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
            }
            Some(id) => {
                let mut am = device::active_model_from(&draft.attributes, draft.price_range);
                am.id = Set(id);
                am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
            }
        }
    }
}

/// In-memory store for tests and local runs without a database.
/// Ids are assigned from a monotonically increasing counter.
#[derive(Default)]
pub struct InMemoryDeviceStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, device::Model>,
}

impl InMemoryDeviceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeviceStore for InMemoryDeviceStore {
    async fn find_all(&self) -> Result<Vec<device::Model>, ServiceError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<device::Model>, ServiceError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn save(&self, draft: DeviceDraft) -> Result<device::Model, ServiceError> {
        let mut inner = self.inner.lock().await;
        let id = match draft.id {
            Some(id) => id,
            None => {
                inner.next_id += 1;
                inner.next_id
            }
        };
        let model = device::model_from_parts(id, &draft.attributes, draft.price_range);
        inner.rows.insert(id, model.clone());
        Ok(model)
    }
}
