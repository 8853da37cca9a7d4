//! Supply-chain and market advice

use rand::Rng;

/// Quantity assumed by the mock path when the request omits one
pub const DEFAULT_QUANTITY: f64 = 1000.0;

/// Quantity at which transport switches to bulk options
const BULK_QUANTITY: f64 = 1000.0;

/// Harvest window reported alongside a model price
pub const MODEL_HARVEST_WINDOW_DAYS: u32 = 7;

/// Markets for a location and crop. There is no market database yet, so the
/// list is the same everywhere.
pub fn suggested_markets(_location: &str, _crop_type: &str) -> Vec<String> {
    vec![
        "Local farmers market".to_string(),
        "Regional wholesale distributors".to_string(),
        "Direct-to-consumer platforms".to_string(),
    ]
}

pub fn storage_recommendations(crop_type: &str) -> String {
    match crop_type.trim().to_lowercase().as_str() {
        "apple" => "Store at 0-4°C with 90-95% humidity. Check regularly for rot.",
        "potato" => "Cure for 2 weeks, then store at 7-10°C in dark, dry conditions.",
        "corn" => "Store dried corn at 13% moisture content in cool, dry conditions.",
        _ => "Store in cool, dry conditions appropriate for crop type.",
    }
    .to_string()
}

pub fn transportation_options(quantity: f64, _location: &str) -> Vec<String> {
    let options: [&str; 3] = if quantity < BULK_QUANTITY {
        ["Small trucks", "Vans", "Local transport cooperatives"]
    } else {
        ["Large refrigerated trucks", "Regional shipping partners", "Bulk transport services"]
    };
    options.iter().map(|o| o.to_string()).collect()
}

/// "N days", N in 5..=14
pub fn mock_harvest_window<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} days", rng.gen_range(5..=14))
}

/// Low bound in [1.5, 4.5), high bound in [4.5, 8.0)
pub fn mock_price_range<R: Rng + ?Sized>(rng: &mut R) -> String {
    let low: f64 = rng.gen_range(1.5..4.5);
    let high: f64 = rng.gen_range(4.5..8.0);
    format!("${:.2} - ${:.2} per unit", low, high)
}

/// Price range around a model price, upper bound 20% above
pub fn model_price_range(price: f64) -> String {
    format!("${:.2} - ${:.2} per unit", price, price * 1.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn parse_range(text: &str) -> (f64, f64) {
        let trimmed = text.trim_end_matches(" per unit");
        let (low, high) = trimmed.split_once(" - ").unwrap();
        (
            low.trim_start_matches('$').parse().unwrap(),
            high.trim_start_matches('$').parse().unwrap(),
        )
    }

    #[test]
    fn test_mock_values_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let window = mock_harvest_window(&mut rng);
            let days: u32 = window.trim_end_matches(" days").parse().unwrap();
            assert!((5..=14).contains(&days));

            let (low, high) = parse_range(&mock_price_range(&mut rng));
            assert!((1.5..=4.5).contains(&low));
            assert!((4.5..=8.0).contains(&high));
        }
    }

    #[test]
    fn test_model_price_range() {
        assert_eq!(model_price_range(2.5), "$2.50 - $3.00 per unit");
    }

    #[test]
    fn test_transport_threshold() {
        assert_eq!(transportation_options(999.0, "x")[0], "Small trucks");
        assert_eq!(transportation_options(1000.0, "x")[0], "Large refrigerated trucks");
    }

    #[test]
    fn test_storage() {
        assert!(storage_recommendations("Potato").starts_with("Cure for 2 weeks"));
        assert_eq!(
            storage_recommendations("kale"),
            "Store in cool, dry conditions appropriate for crop type."
        );
    }
}
