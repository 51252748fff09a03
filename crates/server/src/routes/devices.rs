use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

use models::device::{self, DeviceAttributes};
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/devices", tag = "devices",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<device::Model>>, JsonApiError> {
    match state.devices.list().await {
        Ok(list) => {
            info!(count = list.len(), "list devices");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list devices failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    get, path = "/devices/{id}", tag = "devices",
    params(("id" = i64, Path, description = "Device ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<device::Model>, StatusCode> {
    match state.devices.get(id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    post, path = "/devices", tag = "devices",
    request_body = crate::openapi::DeviceAttributesDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<DeviceAttributes>,
) -> Result<Json<device::Model>, JsonApiError> {
    match state.devices.add(input).await {
        Ok(m) => {
            info!(id = m.id, "created device");
            Ok(Json(m))
        }
        Err(e) => {
            error!(err = %e, "create device failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    post, path = "/devices/predict/{id}", tag = "devices",
    params(("id" = i64, Path, description = "Device ID")),
    responses(
        (status = 200, description = "Predicted"),
        (status = 404, description = "Not Found"),
        (status = 502, description = "Predictor Failed"),
        (status = 500, description = "Predict Failed")
    )
)]
pub async fn predict(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<device::Model>, JsonApiError> {
    match state.devices.predict_and_update(id).await {
        Ok(Some(m)) => {
            info!(id = m.id, price_range = m.price_range, "predicted device price range");
            Ok(Json(m))
        }
        Ok(None) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", None)),
        Err(e) => match e {
            ServiceError::Predictor(_) => {
                error!(err = %e, "predictor call failed");
                Err(JsonApiError::new(StatusCode::BAD_GATEWAY, "Predictor Failed", Some(e.to_string())))
            }
            _ => {
                error!(err = %e, "predict and update failed");
                Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Predict Failed", Some(e.to_string())))
            }
        },
    }
}
