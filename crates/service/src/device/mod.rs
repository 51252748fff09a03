pub mod predictor;
pub mod service;
pub mod store;

pub use predictor::{HttpPredictor, Predictor};
pub use service::DeviceService;
pub use store::{DeviceDraft, DeviceStore, InMemoryDeviceStore, SeaOrmDeviceStore};
