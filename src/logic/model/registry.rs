//! Model Registry
//!
//! Built once at startup, read-only afterwards. Every slot is optional: a
//! missing artifact leaves its slot empty and the matching handler takes its
//! fallback path.

use std::path::Path;
use std::sync::Arc;

use super::inference::{file_checksum, Backend, InferenceError, ModelInfo, Predictor};
use super::mock::MockLeafNetwork;
use super::onnx::{init_runtime, OnnxPredictor, LoadStrategy};
use super::rules::RuleClassifier;
use super::scaler::StandardScaler;
use crate::config::Config;
use crate::constants::LEAF_DISEASE_CLASSES;

/// Leaf classifier plus its class list
#[derive(Clone)]
pub struct LeafModel {
    pub predictor: Arc<dyn Predictor>,
    pub classes: Vec<String>,
}

impl LeafModel {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self {
            predictor,
            classes: LEAF_DISEASE_CLASSES.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn is_mock(&self) -> bool {
        self.predictor.backend() == Backend::Mock
    }
}

/// Standalone soil classifiers used when the soil model pipeline is incomplete
#[derive(Clone)]
pub struct SoilRules {
    pub irrigation: Arc<dyn Predictor>,
    pub fertilization: Arc<dyn Predictor>,
}

impl SoilRules {
    pub fn new() -> Self {
        Self {
            irrigation: Arc::new(RuleClassifier::irrigation()),
            fertilization: Arc::new(RuleClassifier::fertilization()),
        }
    }
}

impl Default for SoilRules {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Default)]
pub struct ModelRegistry {
    /// Whether the inference runtime can be used at all
    pub runtime_available: bool,
    pub leaf_disease: Option<LeafModel>,
    pub irrigation: Option<Arc<dyn Predictor>>,
    /// Irrigation decision over the 19-value soil vector
    pub soil_irrigation: Option<Arc<dyn Predictor>>,
    pub fertilization: Option<Arc<dyn Predictor>>,
    pub supply_chain: Option<Arc<dyn Predictor>>,
    pub soil_scaler: Option<StandardScaler>,
    pub soil_rules: Option<SoilRules>,
    pub details: Vec<ModelInfo>,
}

impl ModelRegistry {
    /// Load all ML models if available
    pub fn load(config: &Config) -> Self {
        let runtime_available = if config.disable_onnx {
            tracing::warn!("ONNX Runtime disabled by configuration");
            false
        } else {
            init_runtime()
        };

        tracing::info!("Model directory: {}", config.model_dir.display());

        let mut registry = Self {
            runtime_available,
            ..Default::default()
        };

        if runtime_available {
            registry.load_leaf_model(&config.model_path(&config.leaf_disease_model), config.mock_seed);
            registry.irrigation = registry.load_single("irrigation", &config.model_path(&config.irrigation_model));
            registry.soil_irrigation =
                registry.load_single("soil_irrigation", &config.model_path(&config.soil_irrigation_model));
            registry.fertilization =
                registry.load_single("fertilization", &config.model_path(&config.fertilization_model));
            registry.supply_chain =
                registry.load_single("supply_chain", &config.model_path(&config.supply_chain_model));
        } else {
            tracing::warn!("Inference runtime unavailable, skipping ONNX models");
        }

        let scaler_path = config.model_path(&config.soil_scaler);
        match StandardScaler::load(&scaler_path) {
            Ok(scaler) => {
                tracing::info!("Soil scaler loaded successfully");
                registry.details.push(
                    ModelInfo::new("soil_scaler", &scaler_path.display().to_string(), Backend::Parameters, "json")
                        .with_checksum(file_checksum(&scaler_path)),
                );
                registry.soil_scaler = Some(scaler);
            }
            Err(InferenceError::NotFound(path)) => tracing::info!("Soil scaler not found at {}", path),
            Err(e) => tracing::warn!("Error loading soil scaler: {}", e),
        }

        if !registry.soil_pipeline_ready() {
            registry.soil_rules = Some(SoilRules::new());
            registry.details.push(ModelInfo::new("soil_rules", "<builtin>", Backend::Rules, "builtin"));
            tracing::info!("Standalone soil classifiers created");
        }

        registry
    }

    /// Leaf model: every load strategy, then the mock network
    fn load_leaf_model(&mut self, path: &Path, seed: u64) {
        tracing::info!("Attempting to load leaf disease model from: {}", path.display());

        match OnnxPredictor::load_with_fallbacks(path) {
            Ok((predictor, strategy)) => {
                tracing::info!("Leaf disease model loaded successfully ({})", strategy.as_str());
                self.details.push(
                    ModelInfo::new("leaf_disease", &path.display().to_string(), Backend::Onnx, strategy.as_str())
                        .with_checksum(file_checksum(path)),
                );
                self.leaf_disease = Some(LeafModel::new(Arc::new(predictor)));
                return;
            }
            Err(InferenceError::NotFound(_)) => {
                tracing::warn!("Model file not found at {}", path.display());
            }
            Err(e) => {
                tracing::error!("Model loading failed after all attempts: {}", e);
                let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
                tracing::error!("Model file size: {} bytes, path: {}", size, absolute.display());
            }
        }

        match MockLeafNetwork::new(LEAF_DISEASE_CLASSES.len(), seed) {
            Ok(mock) => {
                tracing::warn!("Created mock model for fallback");
                self.details.push(ModelInfo::new("leaf_disease", "<mock>", Backend::Mock, "mock"));
                self.leaf_disease = Some(LeafModel::new(Arc::new(mock)));
            }
            Err(e) => tracing::error!("Error creating mock model: {}", e),
        }
    }

    /// Single optimized attempt, no fallbacks
    fn load_single(&mut self, name: &str, path: &Path) -> Option<Arc<dyn Predictor>> {
        match OnnxPredictor::load(path, LoadStrategy::Optimized) {
            Ok(predictor) => {
                tracing::info!("{} model loaded successfully", name);
                self.details.push(
                    ModelInfo::new(name, &path.display().to_string(), Backend::Onnx, LoadStrategy::Optimized.as_str())
                        .with_checksum(file_checksum(path)),
                );
                Some(Arc::new(predictor))
            }
            Err(InferenceError::NotFound(_)) => {
                tracing::info!("{} model not found at {}", name, path.display());
                None
            }
            Err(e) => {
                tracing::warn!("Error loading {} model: {}", name, e);
                None
            }
        }
    }

    /// Scaler and both soil models are present
    pub fn soil_pipeline_ready(&self) -> bool {
        self.soil_scaler.is_some() && self.soil_irrigation.is_some() && self.fertilization.is_some()
    }

    pub fn leaf_is_mock(&self) -> bool {
        self.leaf_disease.as_ref().map(LeafModel::is_mock).unwrap_or(false)
    }
}
