//! Advisory Text
//!
//! Human-readable recommendations attached to every prediction. Pure
//! functions: no model access, no I/O.

pub mod disease;
pub mod irrigation;
pub mod fertilization;
pub mod supply_chain;

pub use disease::{disease_info, DiseaseInfo};
pub use irrigation::{irrigation_schedule, mock_irrigation_amount, soil_irrigation_recommendations, water_saving_tips};
pub use fertilization::fertilization_recommendations;
pub use supply_chain::{
    mock_harvest_window, mock_price_range, model_price_range, storage_recommendations,
    suggested_markets, transportation_options, DEFAULT_QUANTITY,
};
