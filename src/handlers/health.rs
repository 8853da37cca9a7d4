//! Health check handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::constants::APP_VERSION;
use crate::logic::model::ModelInfo;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelFlags {
    pub leaf_disease: bool,
    pub irrigation: bool,
    pub soil_irrigation: bool,
    pub supply_chain: bool,
    pub fertilization: bool,
    pub soil_scaler: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LibraryFlags {
    pub onnx_runtime: bool,
    pub image: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FallbackFlags {
    pub leaf_disease_mock: bool,
    pub soil_rules: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: i64,
    pub models: ModelFlags,
    pub libraries: LibraryFlags,
    pub fallbacks: FallbackFlags,
    pub model_details: Vec<ModelInfo>,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let models = &state.models;

    Json(HealthResponse {
        status: "OK".to_string(),
        version: APP_VERSION.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        models: ModelFlags {
            leaf_disease: models.leaf_disease.is_some(),
            irrigation: models.irrigation.is_some(),
            soil_irrigation: models.soil_irrigation.is_some(),
            supply_chain: models.supply_chain.is_some(),
            fertilization: models.fertilization.is_some(),
            soil_scaler: models.soil_scaler.is_some(),
        },
        libraries: LibraryFlags {
            onnx_runtime: models.runtime_available,
            image: true,
        },
        fallbacks: FallbackFlags {
            leaf_disease_mock: models.leaf_is_mock(),
            soil_rules: models.soil_rules.is_some(),
        },
        model_details: models.details.clone(),
    })
}
