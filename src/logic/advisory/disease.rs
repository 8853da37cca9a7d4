//! Leaf disease reference information

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseInfo {
    pub description: String,
    pub symptoms: String,
    pub treatment: String,
}

impl DiseaseInfo {
    fn new(description: &str, symptoms: &str, treatment: &str) -> Self {
        Self {
            description: description.to_string(),
            symptoms: symptoms.to_string(),
            treatment: treatment.to_string(),
        }
    }
}

/// Description, symptoms and treatment for a class label.
/// Unknown labels get a generic referral entry.
pub fn disease_info(disease_class: &str) -> DiseaseInfo {
    match disease_class {
        "Apple___Apple_scab" => DiseaseInfo::new(
            "Apple scab is a common disease of apple trees caused by the fungus Venturia inaequalis.",
            "Dark, scabby lesions on leaves and fruit",
            "Apply fungicide early in the growing season. Prune infected branches. Rake up and destroy fallen leaves.",
        ),
        "Apple___Black_rot" => DiseaseInfo::new(
            "Black rot is a fungal disease that affects apples, caused by Botryosphaeria obtusa.",
            "Circular lesions on leaves, rotting fruit with concentric rings",
            "Prune out cankers and dead wood. Apply fungicides during the growing season.",
        ),
        "Apple___Cedar_apple_rust" => DiseaseInfo::new(
            "Cedar apple rust is caused by the fungus Gymnosporangium juniperi-virginianae, which alternates between apple and juniper hosts.",
            "Bright yellow-orange spots on upper leaf surfaces, tube-like structures on the underside",
            "Remove nearby junipers where practical. Apply protective fungicides from pink bud through early summer. Plant resistant varieties.",
        ),
        "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot" => DiseaseInfo::new(
            "Gray leaf spot is a foliar disease of maize caused by Cercospora zeae-maydis, favoured by warm humid weather.",
            "Rectangular tan to gray lesions bounded by leaf veins",
            "Rotate crops and till residue. Use resistant hybrids. Apply foliar fungicide when lesions appear before tasseling.",
        ),
        "Corn_(maize)___Common_rust_" => DiseaseInfo::new(
            "Common rust of maize is caused by the fungus Puccinia sorghi.",
            "Small cinnamon-brown pustules scattered on both leaf surfaces",
            "Plant resistant hybrids. Apply fungicide if pustules spread rapidly before silking.",
        ),
        "Corn_(maize)___Northern_Leaf_Blight" => DiseaseInfo::new(
            "Northern leaf blight is caused by the fungus Exserohilum turcicum.",
            "Long, elliptical gray-green to tan lesions on leaves",
            "Use resistant hybrids. Rotate crops and manage residue. Apply fungicide at early disease onset.",
        ),
        "Apple___healthy" | "Corn_(maize)___healthy" => DiseaseInfo::new(
            "No disease detected. The leaf appears healthy.",
            "No visible symptoms",
            "No treatment needed. Continue regular monitoring and good field hygiene.",
        ),
        _ => DiseaseInfo::new(
            "Information not available for this specific disease",
            "Refer to agricultural extension services for identification",
            "Consult with local agricultural experts for treatment options",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LEAF_DISEASE_CLASSES;

    #[test]
    fn test_every_class_has_specific_info() {
        let generic = disease_info("unknown");
        for class in LEAF_DISEASE_CLASSES {
            assert_ne!(disease_info(class), generic, "{} has no entry", class);
        }
    }

    #[test]
    fn test_unknown_class_gets_generic_entry() {
        let info = disease_info("Tomato___Late_blight");
        assert_eq!(info.treatment, "Consult with local agricultural experts for treatment options");
    }
}
