//! Soil analysis model

use serde::{Deserialize, Serialize};

pub const SOIL_MODEL_TYPE: &str = "soil_analysis";

pub const SOIL_RULES_NOTE: &str = "Using rule-based soil classifier (models not available)";

#[derive(Debug, Serialize, Deserialize)]
pub struct SoilAnalysisResponse {
    pub model_type: String,
    pub irrigation_needed: bool,
    pub fertilization_needed: bool,
    pub irrigation_recommendations: String,
    pub fertilization_recommendations: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
