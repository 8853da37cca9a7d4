//! Soil analysis handler

use std::sync::Arc;

use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde_json::{Map, Value};

use super::{first_output, json_object, run_predictor};
use crate::constants::SOIL_DECISION_THRESHOLD;
use crate::logic::advisory::fertilization::DEFAULT_PH;
use crate::logic::advisory::{fertilization_recommendations, soil_irrigation_recommendations};
use crate::logic::features::{number_any, soil_features, SOIL_FEATURE_COUNT};
use crate::logic::model::inference::batch_of_one;
use crate::logic::model::Predictor;
use crate::models::{SoilAnalysisResponse, SOIL_MODEL_TYPE, SOIL_RULES_NOTE};
use crate::{AppResult, AppState};

/// Soil values the recommendation text reads. The lowercase aliases are
/// accepted from older clients.
struct SoilReadings {
    moisture: f64,
    rainfall: f64,
    temperature: f64,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    ph: f64,
}

impl SoilReadings {
    fn from_request(data: &Map<String, Value>) -> Self {
        Self {
            moisture: number_any(data, &["Moisture %", "moisture_pct"]).unwrap_or(0.0),
            rainfall: number_any(data, &["Rainfall mm", "rainfall"]).unwrap_or(0.0),
            temperature: number_any(data, &["Temperature °C", "temperature"]).unwrap_or(0.0),
            nitrogen: number_any(data, &["N_NO3 ppm"]).unwrap_or(0.0),
            phosphorus: number_any(data, &["P ppm"]).unwrap_or(0.0),
            potassium: number_any(data, &["K ppm"]).unwrap_or(0.0),
            ph: number_any(data, &["pH", "ph"]).unwrap_or(DEFAULT_PH),
        }
    }
}

async fn decide(predictor: Arc<dyn Predictor>, features: &[f32; SOIL_FEATURE_COUNT]) -> AppResult<bool> {
    let output = run_predictor(predictor, batch_of_one(features)).await?;
    Ok(first_output(&output)? > SOIL_DECISION_THRESHOLD)
}

/// Predict irrigation and fertilization needs based on soil analysis
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<SoilAnalysisResponse>> {
    let data = json_object(body)?;
    let features = soil_features(&data);
    let models = &state.models;

    let (irrigation_needed, fertilization_needed, note) =
        match (&models.soil_scaler, &models.soil_irrigation, &models.fertilization) {
            (Some(scaler), Some(irrigation), Some(fertilization)) => {
                let scaled = scaler.transform(&features);
                (
                    decide(irrigation.clone(), &scaled).await?,
                    decide(fertilization.clone(), &scaled).await?,
                    None,
                )
            }
            _ => {
                let rules = models.soil_rules.clone().unwrap_or_default();
                tracing::debug!("Soil models incomplete, using rule-based classifiers");
                (
                    decide(rules.irrigation, &features).await?,
                    decide(rules.fertilization, &features).await?,
                    Some(SOIL_RULES_NOTE.to_string()),
                )
            }
        };

    let readings = SoilReadings::from_request(&data);

    Ok(Json(SoilAnalysisResponse {
        model_type: SOIL_MODEL_TYPE.to_string(),
        irrigation_needed,
        fertilization_needed,
        irrigation_recommendations: soil_irrigation_recommendations(
            irrigation_needed,
            readings.moisture,
            readings.rainfall,
            readings.temperature,
        ),
        fertilization_recommendations: fertilization_recommendations(
            fertilization_needed,
            readings.nitrogen,
            readings.phosphorus,
            readings.potassium,
            readings.ph,
        ),
        note,
    }))
}
