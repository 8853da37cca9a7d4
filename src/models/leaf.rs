//! Leaf disease model

use serde::{Deserialize, Serialize};

use crate::logic::advisory::DiseaseInfo;

pub const MOCK_LEAF_NOTE: &str = "Using mock model for demonstration";

#[derive(Debug, Serialize, Deserialize)]
pub struct LeafDiseaseResponse {
    pub disease: String,
    pub confidence: f32,
    pub information: DiseaseInfo,
    pub recommendations: String,
    /// Set only when the mock network answered
    pub note: Option<String>,
}
