//! Supply chain model

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const SUPPLY_CHAIN_REQUIRED_FIELDS: [&str; 4] = ["crop_type", "harvest_date", "quantity", "location"];

pub const MOCK_SUPPLY_CHAIN_NOTE: &str = "Using mock prediction (Model not available)";

#[derive(Debug, Deserialize, Validate)]
pub struct SupplyChainRequest {
    #[validate(length(min = 1))]
    pub crop_type: String,

    /// YYYY-MM-DD
    pub harvest_date: String,

    #[validate(range(min = 0.0))]
    pub quantity: f64,

    pub location: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SupplyChainResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub optimal_harvest_window: String,
    pub estimated_price_range: String,
    pub suggested_markets: Vec<String>,
    pub storage_recommendations: String,
    pub transportation_options: Vec<String>,
}
