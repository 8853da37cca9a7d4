//! Core Logic Modules
//!
//! - `model`: predictors, loading fallbacks, preprocessing
//! - `features`: request payload -> numeric feature vectors
//! - `advisory`: human-readable recommendations

pub mod model;
pub mod features;
pub mod advisory;
