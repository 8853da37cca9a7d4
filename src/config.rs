//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::constants::*;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Directory holding model artifacts
    pub model_dir: PathBuf,

    /// Directory for in-flight uploads
    pub upload_dir: PathBuf,

    pub leaf_disease_model: String,
    pub irrigation_model: String,
    pub soil_irrigation_model: String,
    pub fertilization_model: String,
    pub supply_chain_model: String,
    pub soil_scaler: String,

    /// Force the ONNX runtime off (exercises every fallback path)
    pub disable_onnx: bool,

    /// Seed for the mock leaf network
    pub mock_seed: u64,

    /// Maximum accepted request body, in bytes
    pub max_upload_bytes: usize,

    pub log_format: LogFormat,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            leaf_disease_model: DEFAULT_LEAF_DISEASE_MODEL.to_string(),
            irrigation_model: DEFAULT_IRRIGATION_MODEL.to_string(),
            soil_irrigation_model: DEFAULT_SOIL_IRRIGATION_MODEL.to_string(),
            fertilization_model: DEFAULT_FERTILIZATION_MODEL.to_string(),
            supply_chain_model: DEFAULT_SUPPLY_CHAIN_MODEL.to_string(),
            soil_scaler: DEFAULT_SOIL_SCALER.to_string(),
            disable_onnx: false,
            mock_seed: DEFAULT_MOCK_SEED,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_format: LogFormat::Pretty,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),

            port: parse_var("PORT").unwrap_or(defaults.port),

            model_dir: env::var("MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_dir),

            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),

            leaf_disease_model: env::var("LEAF_DISEASE_MODEL").unwrap_or(defaults.leaf_disease_model),
            irrigation_model: env::var("IRRIGATION_MODEL").unwrap_or(defaults.irrigation_model),
            soil_irrigation_model: env::var("SOIL_IRRIGATION_MODEL").unwrap_or(defaults.soil_irrigation_model),
            fertilization_model: env::var("FERTILIZATION_MODEL").unwrap_or(defaults.fertilization_model),
            supply_chain_model: env::var("SUPPLY_CHAIN_MODEL").unwrap_or(defaults.supply_chain_model),
            soil_scaler: env::var("SOIL_SCALER").unwrap_or(defaults.soil_scaler),

            disable_onnx: env::var("DISABLE_ONNX")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.disable_onnx),

            mock_seed: parse_var("MOCK_SEED").unwrap_or(defaults.mock_seed),

            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES").unwrap_or(defaults.max_upload_bytes),

            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => defaults.log_format,
            },

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Resolve a model file name against the model directory
    pub fn model_path(&self, file: &str) -> PathBuf {
        self.model_dir.join(file)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
