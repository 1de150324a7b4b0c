use axum::{body::Bytes, extract::State, Json};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{ConsumeRequest, ProduceRequest, ProduceResponse, Record};
use crate::state::AppState;

/// Decode a JSON body regardless of its Content-Type.
fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Error decoding request: {}", e);
        ApiError::InvalidPayload(e)
    })
}

/// POST / - Append a record and return its offset.
pub async fn produce(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProduceResponse>, ApiError> {
    let req: ProduceRequest = decode(&body)?;

    let offset = state.log.append(req.value);

    Ok(Json(ProduceResponse { offset }))
}

/// GET / - Read the record at the requested offset.
pub async fn consume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Record>, ApiError> {
    let req: ConsumeRequest = decode(&body)?;

    let record = state.log.read(req.offset).inspect_err(|e| {
        tracing::debug!(offset = req.offset, "Consume failed: {}", e);
    })?;

    Ok(Json(record))
}
