//! Irrigation handler

use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde_json::Value;

use super::{first_output, json_object, parse_request, run_predictor};
use crate::logic::advisory::{irrigation_schedule, mock_irrigation_amount, water_saving_tips};
use crate::logic::features::{first_missing, irrigation_features};
use crate::logic::model::inference::batch_of_one;
use crate::models::{IrrigationRequest, IrrigationResponse, IRRIGATION_REQUIRED_FIELDS, MOCK_IRRIGATION_NOTE};
use crate::{AppError, AppResult, AppState};

/// Predict optimal irrigation schedule
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<IrrigationResponse>> {
    let models = &state.models;

    // With a working runtime the model is expected; no silent mock
    if models.runtime_available && models.irrigation.is_none() {
        return Err(AppError::ModelUnavailable("Model not loaded".to_string()));
    }

    let data = json_object(body)?;
    if let Some(field) = first_missing(&data, &IRRIGATION_REQUIRED_FIELDS) {
        return Err(AppError::missing_field(field));
    }
    let req: IrrigationRequest = parse_request(data)?;

    let (irrigation_amount, note) = match models.irrigation.clone() {
        Some(model) => {
            let features = irrigation_features(
                req.temperature,
                req.humidity,
                req.rainfall,
                req.soil_moisture,
                &req.crop_type,
            );
            let output = run_predictor(model, batch_of_one(&features)).await?;
            (first_output(&output)? as f64, String::new())
        }
        None => (
            mock_irrigation_amount(req.temperature, req.humidity, req.rainfall, req.soil_moisture),
            MOCK_IRRIGATION_NOTE.to_string(),
        ),
    };

    Ok(Json(IrrigationResponse {
        note,
        irrigation_amount,
        recommended_schedule: irrigation_schedule(irrigation_amount, req.humidity, req.temperature),
        water_saving_tips: water_saving_tips(&req.crop_type),
    }))
}
