//! Service layer providing business-oriented operations on top of models.
//! - Separates orchestration logic from data access.
//! - Reuses entity definitions from the `models` crate.
//! - Provides clear error types and substitutable store/predictor seams.

pub mod device;
pub mod errors;
