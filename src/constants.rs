//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! `Config::from_env` falls back to these when a variable is unset.

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5050;

/// Directory holding the ONNX artifacts and scaler parameters
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Directory uploads are written to while they are being classified
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

pub const DEFAULT_LEAF_DISEASE_MODEL: &str = "leaf_disease.onnx";
pub const DEFAULT_IRRIGATION_MODEL: &str = "irrigation.onnx";
pub const DEFAULT_SOIL_IRRIGATION_MODEL: &str = "soil_irrigation.onnx";
pub const DEFAULT_FERTILIZATION_MODEL: &str = "fertilization.onnx";
pub const DEFAULT_SUPPLY_CHAIN_MODEL: &str = "supply_chain.onnx";
pub const DEFAULT_SOIL_SCALER: &str = "scaler.json";

/// Seed for the mock leaf network weights
pub const DEFAULT_MOCK_SEED: u64 = 42;

/// Upload body limit (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "agri_predict=debug,tower_http=debug";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "agri-predict";

// ============================================
// Model input geometry
// ============================================

/// Leaf images are resized to this edge length before inference
pub const LEAF_INPUT_SIZE: u32 = 224;

/// Sigmoid outputs above this mean "needed"
pub const SOIL_DECISION_THRESHOLD: f32 = 0.5;

/// Leaf disease classes, in model output order
pub const LEAF_DISEASE_CLASSES: [&str; 8] = [
    "Apple___Apple_scab",
    "Apple___Black_rot",
    "Apple___Cedar_apple_rust",
    "Apple___healthy",
    "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
    "Corn_(maize)___Common_rust_",
    "Corn_(maize)___Northern_Leaf_Blight",
    "Corn_(maize)___healthy",
];
