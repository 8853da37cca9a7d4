//! Mock leaf network
//!
//! Stand-in used when the leaf disease artifact is missing or refuses to
//! load. Weights are seeded so responses are reproducible, but the class it
//! picks carries no meaning. Responses from it are flagged as mock.

use ndarray::{s, Array1, Array2, ArrayD, Ix4};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::inference::{softmax, Backend, InferenceError, Predictor};

/// Pooling grid edge (GRID x GRID cells per channel)
const GRID: usize = 4;
const CHANNELS: usize = 3;
const POOLED_FEATURES: usize = GRID * GRID * CHANNELS;

#[derive(Debug, Clone)]
pub struct MockLeafNetwork {
    weights: Array2<f32>,
    bias: Array1<f32>,
}

impl MockLeafNetwork {
    pub fn new(class_count: usize, seed: u64) -> Result<Self, InferenceError> {
        if class_count == 0 {
            return Err(InferenceError::Load("Mock network needs at least one class".to_string()));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let weights = Array2::from_shape_fn((POOLED_FEATURES, class_count), |_| {
            rng.gen_range(-2.0f32..2.0)
        });
        let bias = Array1::from_shape_fn(class_count, |_| rng.gen_range(-0.1f32..0.1));

        Ok(Self { weights, bias })
    }

    /// Average each channel over a GRID x GRID partition of the image
    fn pool(input: ArrayD<f32>) -> Result<Array1<f32>, InferenceError> {
        let image = input
            .into_dimensionality::<Ix4>()
            .map_err(|e| InferenceError::Input(format!("Expected NHWC tensor: {}", e)))?;

        let (batch, height, width, channels) = image.dim();
        if batch == 0 || channels != CHANNELS || height < GRID || width < GRID {
            return Err(InferenceError::Input(format!(
                "Unsupported image tensor shape {:?}",
                image.shape()
            )));
        }

        let mut pooled = Array1::<f32>::zeros(POOLED_FEATURES);
        let mut idx = 0;
        for gy in 0..GRID {
            let (y0, y1) = (gy * height / GRID, (gy + 1) * height / GRID);
            for gx in 0..GRID {
                let (x0, x1) = (gx * width / GRID, (gx + 1) * width / GRID);
                for c in 0..CHANNELS {
                    pooled[idx] = image.slice(s![0, y0..y1, x0..x1, c]).mean().unwrap_or(0.0);
                    idx += 1;
                }
            }
        }

        Ok(pooled)
    }
}

impl Predictor for MockLeafNetwork {
    fn backend(&self) -> Backend {
        Backend::Mock
    }

    fn predict(&self, input: ArrayD<f32>) -> Result<Vec<f32>, InferenceError> {
        let pooled = Self::pool(input)?;
        let logits = pooled.dot(&self.weights) + &self.bias;
        Ok(softmax(logits.as_slice().unwrap_or(&[])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    fn image(fill: f32) -> ArrayD<f32> {
        ArrayD::from_elem(IxDyn(&[1, 32, 32, 3]), fill)
    }

    #[test]
    fn test_outputs_distribution() {
        let net = MockLeafNetwork::new(8, 42).unwrap();
        let probs = net.predict(image(0.5)).unwrap();

        assert_eq!(probs.len(), 8);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-4);
        assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_seed_is_deterministic() {
        let a = MockLeafNetwork::new(8, 7).unwrap();
        let b = MockLeafNetwork::new(8, 7).unwrap();
        assert_eq!(a.predict(image(0.3)).unwrap(), b.predict(image(0.3)).unwrap());
    }

    #[test]
    fn test_rejects_bad_shape() {
        let net = MockLeafNetwork::new(8, 42).unwrap();
        let flat = ArrayD::from_elem(IxDyn(&[1, 19]), 0.0);
        assert!(matches!(net.predict(flat), Err(InferenceError::Input(_))));
    }

    #[test]
    fn test_zero_classes_rejected() {
        assert!(MockLeafNetwork::new(0, 42).is_err());
    }
}
