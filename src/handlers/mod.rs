//! HTTP handlers

pub mod health;
pub mod leaf_disease;
pub mod irrigation;
pub mod supply_chain;
pub mod soil_analysis;


use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, Json};
use ndarray::ArrayD;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

use crate::logic::model::Predictor;
use crate::{AppError, AppResult};

/// Unwrap a JSON body that must be an object
pub(crate) fn json_object(body: Result<Json<Value>, JsonRejection>) -> AppResult<Map<String, Value>> {
    let Json(value) = body?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::ValidationError("Request body must be a JSON object".to_string())),
    }
}

/// Deserialize and validate a typed request from an already-checked object
pub(crate) fn parse_request<T: DeserializeOwned + Validate>(data: Map<String, Value>) -> AppResult<T> {
    let req: T = serde_json::from_value(Value::Object(data))
        .map_err(|e| AppError::ValidationError(format!("Invalid request: {}", e)))?;
    req.validate()?;
    Ok(req)
}

/// Run a predictor off the async workers
pub(crate) async fn run_predictor(predictor: Arc<dyn Predictor>, input: ArrayD<f32>) -> AppResult<Vec<f32>> {
    let output = tokio::task::spawn_blocking(move || predictor.predict(input)).await??;
    Ok(output)
}

/// First output value, or a 500 when the model returned nothing
pub(crate) fn first_output(output: &[f32]) -> AppResult<f32> {
    output
        .first()
        .copied()
        .ok_or_else(|| AppError::PredictionFailed("Model returned an empty output".to_string()))
}
