//! Irrigation advice

/// Heuristic irrigation amount in mm when no model is available
pub fn mock_irrigation_amount(temperature: f64, humidity: f64, rainfall: f64, soil_moisture: f64) -> f64 {
    (5.0 - rainfall + temperature / 10.0 - humidity / 20.0 - soil_moisture / 5.0).max(0.0)
}

/// Schedule text for a predicted amount under current weather
pub fn irrigation_schedule(irrigation_amount: f64, humidity: f64, temperature: f64) -> String {
    if irrigation_amount <= 0.0 {
        return "No irrigation needed at this time".to_string();
    }

    if humidity > 70.0 {
        format!(
            "Apply {:.2} mm of water over the next 3 days, dividing into smaller sessions",
            irrigation_amount
        )
    } else if temperature > 30.0 {
        format!(
            "Apply {:.2} mm of water in the early morning or evening to reduce evaporation",
            irrigation_amount
        )
    } else {
        format!("Apply {:.2} mm of water within the next 48 hours", irrigation_amount)
    }
}

const GENERAL_TIPS: [&str; 4] = [
    "Use drip irrigation when possible",
    "Mulch around plants to reduce evaporation",
    "Check soil moisture before watering",
    "Water during cooler parts of the day",
];

/// General tips followed by crop-specific ones
pub fn water_saving_tips(crop_type: &str) -> Vec<String> {
    let specific: &[&str] = match crop_type.trim().to_lowercase().as_str() {
        "rice" => &[
            "Consider alternate wetting and drying technique",
            "Maintain proper water levels at critical growth stages",
        ],
        "wheat" => &[
            "Focus irrigation during germination and grain filling stages",
            "Use soil moisture sensors to optimize watering",
        ],
        "corn" => &[
            "Ensure adequate water during silking and tasseling stages",
            "Use deficit irrigation during less critical growth phases",
        ],
        _ => &[],
    };

    GENERAL_TIPS
        .iter()
        .chain(specific.iter())
        .map(|tip| tip.to_string())
        .collect()
}

/// Soil-analysis irrigation advice
pub fn soil_irrigation_recommendations(
    irrigation_needed: bool,
    moisture: f64,
    rainfall: f64,
    temperature: f64,
) -> String {
    if !irrigation_needed {
        return "No irrigation needed at this time.".to_string();
    }

    let urgency = if moisture < 10.0 {
        "Urgent irrigation needed"
    } else if moisture < 15.0 {
        "Irrigation recommended soon"
    } else {
        "Light irrigation recommended"
    };

    let rainfall_note = if rainfall > 5.0 {
        "Consider recent rainfall when planning irrigation."
    } else {
        "Limited recent rainfall detected."
    };

    let temp_note = if temperature > 30.0 {
        "Due to high temperatures, consider irrigating during early morning or evening to reduce evaporation."
    } else {
        "Current temperatures are optimal for regular irrigation scheduling."
    };

    format!("{}. {} {}", urgency, rainfall_note, temp_note)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_amount_formula() {
        // 5 - 0 + 3 - 2 - 2 = 4
        assert!((mock_irrigation_amount(30.0, 40.0, 0.0, 10.0) - 4.0).abs() < 1e-9);
        // heavy rain clamps to zero
        assert_eq!(mock_irrigation_amount(20.0, 50.0, 40.0, 20.0), 0.0);
    }

    #[test]
    fn test_schedule_branches() {
        assert_eq!(irrigation_schedule(0.0, 80.0, 35.0), "No irrigation needed at this time");
        assert!(irrigation_schedule(2.5, 75.0, 35.0).contains("over the next 3 days"));
        assert!(irrigation_schedule(2.5, 50.0, 35.0).contains("early morning or evening"));
        assert_eq!(
            irrigation_schedule(2.346, 50.0, 20.0),
            "Apply 2.35 mm of water within the next 48 hours"
        );
    }

    #[test]
    fn test_water_saving_tips() {
        assert_eq!(water_saving_tips("Rice").len(), 6);
        assert_eq!(water_saving_tips("tomato").len(), 4);
        assert_eq!(water_saving_tips("corn")[4], "Ensure adequate water during silking and tasseling stages");
    }

    #[test]
    fn test_soil_recommendations() {
        assert_eq!(
            soil_irrigation_recommendations(false, 5.0, 0.0, 40.0),
            "No irrigation needed at this time."
        );

        let urgent = soil_irrigation_recommendations(true, 8.0, 1.0, 35.0);
        assert!(urgent.starts_with("Urgent irrigation needed."));
        assert!(urgent.contains("Limited recent rainfall detected."));
        assert!(urgent.contains("Due to high temperatures"));

        let light = soil_irrigation_recommendations(true, 20.0, 8.0, 22.0);
        assert_eq!(
            light,
            "Light irrigation recommended. Consider recent rainfall when planning irrigation. \
             Current temperatures are optimal for regular irrigation scheduling."
        );
    }
}
