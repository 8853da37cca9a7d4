//! Model Module - Inference Engine
//!
//! Predictors behind one trait so a handler never cares whether the answer
//! came from an ONNX graph, the mock leaf network, or a rule table.

pub mod inference;
pub mod onnx;
pub mod mock;
pub mod rules;
pub mod scaler;
pub mod image;
pub mod registry;

// Re-export common types
pub use inference::{Backend, InferenceError, ModelInfo, Predictor};
pub use registry::{LeafModel, ModelRegistry};
pub use scaler::StandardScaler;
