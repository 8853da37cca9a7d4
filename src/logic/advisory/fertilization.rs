//! Fertilization advice from NPK and pH levels

/// pH assumed when the analysis does not report one
pub const DEFAULT_PH: f64 = 7.0;

pub fn fertilization_recommendations(
    fertilization_needed: bool,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    ph: f64,
) -> String {
    if !fertilization_needed {
        return "No fertilization needed at this time.".to_string();
    }

    let mut recommendations = Vec::new();

    if nitrogen < 20.0 {
        recommendations.push("Nitrogen deficiency detected. Consider adding nitrogen-rich fertilizer.");
    }
    if phosphorus < 15.0 {
        recommendations.push("Phosphorus levels are low. Add phosphate fertilizers for better root development.");
    }
    if potassium < 80.0 {
        recommendations.push("Potassium levels are below optimal. Supplement with potassium-rich fertilizers.");
    }

    if recommendations.is_empty() {
        recommendations.push("General fertilization recommended to maintain soil health.");
    }

    if ph < 5.5 {
        recommendations.push("Soil is acidic. Consider adding lime to raise pH.");
    } else if ph > 7.5 {
        recommendations.push("Soil is alkaline. Consider adding sulfur to lower pH.");
    }

    recommendations.join(" ")
}
