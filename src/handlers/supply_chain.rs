//! Supply chain handler

use axum::{extract::{rejection::JsonRejection, State}, Json};
use chrono::{Datelike, NaiveDate};
use serde_json::{Map, Value};

use super::{first_output, json_object, parse_request, run_predictor};
use crate::logic::advisory::supply_chain::MODEL_HARVEST_WINDOW_DAYS;
use crate::logic::advisory::{
    mock_harvest_window, mock_price_range, model_price_range, storage_recommendations,
    suggested_markets, transportation_options, DEFAULT_QUANTITY,
};
use crate::logic::features::{first_missing, number, supply_chain_features};
use crate::logic::model::inference::batch_of_one;
use crate::models::{
    SupplyChainRequest, SupplyChainResponse, MOCK_SUPPLY_CHAIN_NOTE, SUPPLY_CHAIN_REQUIRED_FIELDS,
};
use crate::{AppError, AppResult, AppState};

const UNKNOWN: &str = "Unknown";

/// Randomised advice when no model is loaded. Fields are optional here.
fn mock_response(data: &Map<String, Value>) -> SupplyChainResponse {
    let location = data.get("location").and_then(Value::as_str).unwrap_or(UNKNOWN);
    let crop_type = data.get("crop_type").and_then(Value::as_str).unwrap_or(UNKNOWN);
    let quantity = number(data, "quantity").unwrap_or(DEFAULT_QUANTITY);

    let mut rng = rand::thread_rng();

    SupplyChainResponse {
        note: Some(MOCK_SUPPLY_CHAIN_NOTE.to_string()),
        optimal_harvest_window: mock_harvest_window(&mut rng),
        estimated_price_range: mock_price_range(&mut rng),
        suggested_markets: suggested_markets(location, crop_type),
        storage_recommendations: storage_recommendations(crop_type),
        transportation_options: transportation_options(quantity, location),
    }
}

/// Day of year for a `YYYY-MM-DD` harvest date
fn harvest_day_of_year(date: &str) -> AppResult<u32> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|d| d.ordinal())
        .map_err(|_| AppError::ValidationError("Invalid harvest_date: expected YYYY-MM-DD".to_string()))
}

/// Predict supply chain metrics
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<SupplyChainResponse>> {
    let data = json_object(body)?;

    let Some(model) = state.models.supply_chain.clone() else {
        return Ok(Json(mock_response(&data)));
    };

    if let Some(field) = first_missing(&data, &SUPPLY_CHAIN_REQUIRED_FIELDS) {
        return Err(AppError::missing_field(field));
    }
    let req: SupplyChainRequest = parse_request(data)?;
    let day_of_year = harvest_day_of_year(&req.harvest_date)?;

    let features = supply_chain_features(&req.crop_type, day_of_year, req.quantity);
    let output = run_predictor(model, batch_of_one(&features)).await?;
    let price = first_output(&output)? as f64;

    Ok(Json(SupplyChainResponse {
        note: None,
        optimal_harvest_window: format!("{} days", MODEL_HARVEST_WINDOW_DAYS),
        estimated_price_range: model_price_range(price),
        suggested_markets: suggested_markets(&req.location, &req.crop_type),
        storage_recommendations: storage_recommendations(&req.crop_type),
        transportation_options: transportation_options(req.quantity, &req.location),
    }))
}
