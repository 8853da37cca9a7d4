//! Feature Extraction
//!
//! Turns request payloads into the fixed-length vectors the models expect.
//! The soil layout order is the training order of the soil models; never
//! reorder it.

use serde_json::{Map, Value};

// ============================================================================
// SOIL LAYOUT
// ============================================================================

/// Number of soil analysis features
pub const SOIL_FEATURE_COUNT: usize = 19;

/// Soil analysis keys, in model order
pub const SOIL_FEATURE_LAYOUT: [&str; SOIL_FEATURE_COUNT] = [
    "Sand %",
    "Clay %",
    "Silt %",
    "pH",
    "EC mS/cm",
    "O.M. %",
    "CACO3 %",
    "N_NO3 ppm",
    "P ppm",
    "K ppm",
    "Mg ppm",
    "Fe ppm",
    "Zn ppm",
    "Mn ppm",
    "Cu ppm",
    "B ppm",
    "Moisture %",
    "Temperature °C",
    "Rainfall mm",
];

pub const SOIL_N_NO3: usize = 7;
pub const SOIL_P: usize = 8;
pub const SOIL_K: usize = 9;
pub const SOIL_MOISTURE: usize = 16;
pub const SOIL_TEMPERATURE: usize = 17;
pub const SOIL_RAINFALL: usize = 18;

/// Soil analysis vector; absent or non-numeric keys read as 0
pub fn soil_features(data: &Map<String, Value>) -> [f32; SOIL_FEATURE_COUNT] {
    let mut features = [0.0f32; SOIL_FEATURE_COUNT];
    for (slot, key) in features.iter_mut().zip(SOIL_FEATURE_LAYOUT) {
        *slot = number(data, key).unwrap_or(0.0) as f32;
    }
    features
}

// ============================================================================
// CROP ENCODING
// ============================================================================

/// Numeric crop code, case insensitive; unknown crops are 0
pub fn encode_crop_type(crop_type: &str) -> u8 {
    match crop_type.trim().to_lowercase().as_str() {
        "rice" => 0,
        "wheat" => 1,
        "corn" => 2,
        "potato" => 3,
        "tomato" => 4,
        _ => 0,
    }
}

/// Irrigation model input
pub fn irrigation_features(
    temperature: f64,
    humidity: f64,
    rainfall: f64,
    soil_moisture: f64,
    crop_type: &str,
) -> [f32; 5] {
    [
        temperature as f32,
        humidity as f32,
        rainfall as f32,
        soil_moisture as f32,
        encode_crop_type(crop_type) as f32,
    ]
}

/// Supply-chain model input. No location vocabulary exists, so the
/// location code is always 0.
pub fn supply_chain_features(crop_type: &str, harvest_day_of_year: u32, quantity: f64) -> [f32; 4] {
    [
        encode_crop_type(crop_type) as f32,
        harvest_day_of_year as f32,
        quantity as f32,
        0.0,
    ]
}

// ============================================================================
// JSON HELPERS
// ============================================================================

/// Numeric field lookup; numeric strings are accepted
pub fn number(data: &Map<String, Value>, key: &str) -> Option<f64> {
    match data.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// First key present among `keys`, as a number
pub fn number_any(data: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| number(data, k))
}

/// First required key absent from `data`
pub fn first_missing<'a>(data: &Map<String, Value>, required: &[&'a str]) -> Option<&'a str> {
    required.iter().copied().find(|field| !data.contains_key(*field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_soil_layout_indices() {
        assert_eq!(SOIL_FEATURE_LAYOUT[SOIL_N_NO3], "N_NO3 ppm");
        assert_eq!(SOIL_FEATURE_LAYOUT[SOIL_P], "P ppm");
        assert_eq!(SOIL_FEATURE_LAYOUT[SOIL_K], "K ppm");
        assert_eq!(SOIL_FEATURE_LAYOUT[SOIL_MOISTURE], "Moisture %");
        assert_eq!(SOIL_FEATURE_LAYOUT[SOIL_TEMPERATURE], "Temperature °C");
        assert_eq!(SOIL_FEATURE_LAYOUT[SOIL_RAINFALL], "Rainfall mm");
    }

    #[test]
    fn test_soil_features_default_to_zero() {
        let data = object(json!({ "pH": 6.5, "K ppm": "120", "Sand %": "n/a" }));
        let features = soil_features(&data);

        assert_eq!(features[3], 6.5);
        assert_eq!(features[SOIL_K], 120.0);
        assert_eq!(features[0], 0.0);
        assert_eq!(features.iter().filter(|v| **v != 0.0).count(), 2);
    }

    #[test]
    fn test_crop_encoding() {
        assert_eq!(encode_crop_type("Wheat"), 1);
        assert_eq!(encode_crop_type(" TOMATO "), 4);
        assert_eq!(encode_crop_type("banana"), 0);
    }

    #[test]
    fn test_first_missing_respects_order() {
        let data = object(json!({ "temperature": 20, "rainfall": 1 }));
        assert_eq!(
            first_missing(&data, &["temperature", "humidity", "rainfall", "soil_moisture"]),
            Some("humidity")
        );
        assert_eq!(first_missing(&data, &["temperature"]), None);
    }

    #[test]
    fn test_supply_chain_features() {
        assert_eq!(supply_chain_features("corn", 150, 500.0), [2.0, 150.0, 500.0, 0.0]);
    }
}
