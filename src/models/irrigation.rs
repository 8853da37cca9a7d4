//! Irrigation model

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const IRRIGATION_REQUIRED_FIELDS: [&str; 5] =
    ["temperature", "humidity", "rainfall", "soil_moisture", "crop_type"];

pub const MOCK_IRRIGATION_NOTE: &str = "Using mock prediction (inference runtime not available)";

#[derive(Debug, Deserialize, Validate)]
pub struct IrrigationRequest {
    /// °C
    pub temperature: f64,

    /// Relative humidity, %
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,

    /// Recent rainfall, mm
    #[validate(range(min = 0.0))]
    pub rainfall: f64,

    /// Volumetric soil moisture, %
    #[validate(range(min = 0.0))]
    pub soil_moisture: f64,

    #[validate(length(min = 1))]
    pub crop_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IrrigationResponse {
    /// Empty when a model answered
    pub note: String,
    /// mm
    pub irrigation_amount: f64,
    pub recommended_schedule: String,
    pub water_saving_tips: Vec<String>,
}
