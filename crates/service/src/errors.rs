use thiserror::Error;

/// Failures the orchestration layer can surface. An absent device is not an
/// error; operations report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(String),
    #[error("predictor error: {0}")]
    Predictor(String),
}
