//! Standard scaler for soil features
//!
//! Parameters come from a JSON file exported at training time:
//! `{ "mean": [..19], "scale": [..19] }`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::inference::InferenceError;
use crate::logic::features::SOIL_FEATURE_COUNT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Result<Self, InferenceError> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        if !path.exists() {
            return Err(InferenceError::NotFound(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| InferenceError::Load(format!("Failed to read scaler: {}", e)))?;
        let scaler: Self = serde_json::from_str(&raw)
            .map_err(|e| InferenceError::Load(format!("Invalid scaler file: {}", e)))?;
        scaler.validate()?;

        Ok(scaler)
    }

    fn validate(&self) -> Result<(), InferenceError> {
        if self.mean.len() != SOIL_FEATURE_COUNT || self.scale.len() != SOIL_FEATURE_COUNT {
            return Err(InferenceError::Load(format!(
                "Scaler expects {} features, got mean={} scale={}",
                SOIL_FEATURE_COUNT,
                self.mean.len(),
                self.scale.len()
            )));
        }
        Ok(())
    }

    /// `(x - mean) / scale`; a zero scale leaves the centred value unscaled
    pub fn transform(&self, features: &[f32; SOIL_FEATURE_COUNT]) -> [f32; SOIL_FEATURE_COUNT] {
        let mut scaled = [0.0f32; SOIL_FEATURE_COUNT];
        for i in 0..SOIL_FEATURE_COUNT {
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            scaled[i] = (features[i] - self.mean[i]) / scale;
        }
        scaled
    }
}
