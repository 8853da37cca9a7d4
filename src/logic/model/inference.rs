//! Inference Engine - Predictor trait and shared types

use std::path::Path;

use chrono::{DateTime, Utc};
use ndarray::{Array1, ArrayD, Axis};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Model not found: {0}")]
    NotFound(String),

    #[error("Failed to load model: {0}")]
    Load(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Inference failed: {0}")]
    Run(String),
}

// ============================================================================
// PREDICTOR TRAIT
// ============================================================================

/// Where a prediction comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Pre-trained ONNX graph
    Onnx,
    /// Seeded stand-in network, answers are not meaningful
    Mock,
    /// Hard-coded heuristic
    Rules,
    /// Fitted parameters loaded from JSON (soil scaler)
    Parameters,
}

/// One forward pass over a batch of one.
///
/// Returns the first output row flattened.
pub trait Predictor: Send + Sync {
    fn backend(&self) -> Backend;
    fn predict(&self, input: ArrayD<f32>) -> Result<Vec<f32>, InferenceError>;
}

// ============================================================================
// METADATA
// ============================================================================

/// Load record for one artifact, reported by `/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub path: String,
    pub backend: Backend,
    /// Load strategy that succeeded
    pub strategy: String,
    /// SHA-256 of the artifact, absent for built-in fallbacks
    pub checksum: Option<String>,
    pub loaded_at: DateTime<Utc>,
}

impl ModelInfo {
    pub fn new(name: &str, path: &str, backend: Backend, strategy: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            backend,
            strategy: strategy.to_string(),
            checksum: None,
            loaded_at: Utc::now(),
        }
    }

    pub fn with_checksum(mut self, checksum: Option<String>) -> Self {
        self.checksum = checksum;
        self
    }
}

/// SHA-256 of a file, hex encoded
pub fn file_checksum(path: &Path) -> Option<String> {
    let bytes = std::fs::read(path).ok()?;
    Some(hex::encode(Sha256::digest(&bytes)))
}

/// `[1, n]` tensor from a single feature row
pub fn batch_of_one(values: &[f32]) -> ArrayD<f32> {
    Array1::from(values.to_vec()).insert_axis(Axis(0)).into_dyn()
}

/// Index and value of the largest element
pub fn argmax(values: &[f32]) -> Option<(usize, f32)> {
    values
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
}

/// Softmax over a logit slice
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum <= 0.0 || !sum.is_finite() {
        return vec![1.0 / logits.len().max(1) as f32; logits.len()];
    }
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_picks_first_max() {
        assert_eq!(argmax(&[0.1, 0.7, 0.7, 0.2]), Some((1, 0.7)));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_batch_of_one_shape() {
        let batch = batch_of_one(&[1.0, 2.0, 3.0]);
        assert_eq!(batch.shape(), &[1, 3]);
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);
    }

    #[test]
    fn test_file_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.onnx");
        std::fs::write(&path, b"abc").unwrap();

        assert_eq!(
            file_checksum(&path).as_deref(),
            Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
        assert!(file_checksum(&dir.path().join("missing")).is_none());
    }
}
