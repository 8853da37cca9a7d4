//! ONNX Runtime backend
//!
//! Loads ONNX graphs and runs them behind the `Predictor` trait.

use std::path::Path;

use ndarray::ArrayD;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Value;
use parking_lot::Mutex;

use super::inference::{Backend, InferenceError, Predictor};

// ============================================================================
// RUNTIME
// ============================================================================

/// Probe the ONNX Runtime environment.
///
/// Returns false when the shared library cannot be set up; every model then
/// takes its fallback path.
pub fn init_runtime() -> bool {
    match Session::builder() {
        Ok(_) => {
            tracing::info!("ONNX Runtime initialised");
            true
        }
        Err(e) => {
            tracing::warn!("ONNX Runtime not available: {}", e);
            false
        }
    }
}

// ============================================================================
// LOAD STRATEGIES
// ============================================================================

/// Ways to turn a file into a session, from strict to permissive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Full graph optimisation
    Optimized,
    /// No graph rewrites, single intra-op thread
    Unoptimized,
    /// Read bytes up front, build from memory
    InMemory,
}

impl LoadStrategy {
    pub const ALL: [LoadStrategy; 3] = [
        LoadStrategy::Optimized,
        LoadStrategy::Unoptimized,
        LoadStrategy::InMemory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStrategy::Optimized => "optimized",
            LoadStrategy::Unoptimized => "unoptimized",
            LoadStrategy::InMemory => "in_memory",
        }
    }
}

// ============================================================================
// PREDICTOR
// ============================================================================

/// A loaded ONNX session
pub struct OnnxPredictor {
    // Session::run needs &mut
    session: Mutex<Session>,
    output_name: String,
}

impl std::fmt::Debug for OnnxPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxPredictor")
            .field("output_name", &self.output_name)
            .finish()
    }
}

impl OnnxPredictor {
    /// Load with one strategy
    pub fn load(path: &Path, strategy: LoadStrategy) -> Result<Self, InferenceError> {
        if !path.exists() {
            return Err(InferenceError::NotFound(path.display().to_string()));
        }

        let builder = Session::builder()
            .map_err(|e| InferenceError::Load(format!("Failed to create session builder: {}", e)))?;

        let session = match strategy {
            LoadStrategy::Optimized => builder
                .with_optimization_level(GraphOptimizationLevel::Level3)
                .map_err(|e| InferenceError::Load(format!("Failed to set optimization: {}", e)))?
                .commit_from_file(path)
                .map_err(|e| InferenceError::Load(e.to_string()))?,
            LoadStrategy::Unoptimized => builder
                .with_optimization_level(GraphOptimizationLevel::Disable)
                .map_err(|e| InferenceError::Load(format!("Failed to set optimization: {}", e)))?
                .with_intra_threads(1)
                .map_err(|e| InferenceError::Load(format!("Failed to set threads: {}", e)))?
                .commit_from_file(path)
                .map_err(|e| InferenceError::Load(e.to_string()))?,
            LoadStrategy::InMemory => {
                let bytes = std::fs::read(path)
                    .map_err(|e| InferenceError::Load(format!("Failed to read model bytes: {}", e)))?;
                builder
                    .commit_from_memory(&bytes)
                    .map_err(|e| InferenceError::Load(format!("Load from memory error: {}", e)))?
            }
        };

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::Load("No output defined".to_string()))?;

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }

    /// Try every strategy in order, returning the first that works
    pub fn load_with_fallbacks(path: &Path) -> Result<(Self, LoadStrategy), InferenceError> {
        let mut last_error = InferenceError::NotFound(path.display().to_string());

        for strategy in LoadStrategy::ALL {
            tracing::info!("Loading {} (strategy: {})", path.display(), strategy.as_str());
            match Self::load(path, strategy) {
                Ok(predictor) => return Ok((predictor, strategy)),
                Err(e @ InferenceError::NotFound(_)) => return Err(e),
                Err(e) => {
                    tracing::warn!("Strategy {} failed: {}", strategy.as_str(), e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

impl Predictor for OnnxPredictor {
    fn backend(&self) -> Backend {
        Backend::Onnx
    }

    fn predict(&self, input: ArrayD<f32>) -> Result<Vec<f32>, InferenceError> {
        let mut session = self.session.lock();

        let input_tensor = Value::from_array(input)
            .map_err(|e| InferenceError::Input(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Run(e.to_string()))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| InferenceError::Run("No output".to_string()))?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Run(format!("Extract error: {}", e)))?;

        Ok(data.to_vec())
    }
}
