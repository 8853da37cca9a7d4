//! Rule-based soil classifiers
//!
//! Standalone stand-ins for the irrigation and fertilization soil models.
//! They read the raw (unscaled) 19-value soil vector and emit 1.0 / 0.0 so
//! callers can apply the same decision threshold as for model output.

use ndarray::ArrayD;

use super::inference::{Backend, InferenceError, Predictor};
use crate::logic::features::{
    SOIL_FEATURE_COUNT, SOIL_K, SOIL_MOISTURE, SOIL_N_NO3, SOIL_P, SOIL_RAINFALL,
    SOIL_TEMPERATURE,
};

/// Which soil decision a rule classifier makes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilRule {
    Irrigation,
    Fertilization,
}

#[derive(Debug, Clone)]
pub struct RuleClassifier {
    rule: SoilRule,
}

impl RuleClassifier {
    pub fn irrigation() -> Self {
        Self { rule: SoilRule::Irrigation }
    }

    pub fn fertilization() -> Self {
        Self { rule: SoilRule::Fertilization }
    }

    /// Apply the rule to a raw soil vector
    pub fn decide(&self, features: &[f32]) -> bool {
        match self.rule {
            SoilRule::Irrigation => {
                features[SOIL_MOISTURE] < 15.0
                    || features[SOIL_TEMPERATURE] > 32.0
                    || features[SOIL_RAINFALL] < 2.0
            }
            SoilRule::Fertilization => {
                features[SOIL_N_NO3] < 20.0 || features[SOIL_P] < 15.0 || features[SOIL_K] < 80.0
            }
        }
    }
}

impl Predictor for RuleClassifier {
    fn backend(&self) -> Backend {
        Backend::Rules
    }

    fn predict(&self, input: ArrayD<f32>) -> Result<Vec<f32>, InferenceError> {
        let features: Vec<f32> = input.iter().copied().collect();
        if features.len() != SOIL_FEATURE_COUNT {
            return Err(InferenceError::Input(format!(
                "Expected {} soil features, got {}",
                SOIL_FEATURE_COUNT,
                features.len()
            )));
        }

        Ok(vec![if self.decide(&features) { 1.0 } else { 0.0 }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    fn healthy_soil() -> [f32; SOIL_FEATURE_COUNT] {
        let mut f = [0.0; SOIL_FEATURE_COUNT];
        f[SOIL_N_NO3] = 30.0;
        f[SOIL_P] = 25.0;
        f[SOIL_K] = 150.0;
        f[SOIL_MOISTURE] = 22.0;
        f[SOIL_TEMPERATURE] = 24.0;
        f[SOIL_RAINFALL] = 5.0;
        f
    }

    #[test]
    fn test_healthy_soil_needs_nothing() {
        let soil = healthy_soil();
        assert!(!RuleClassifier::irrigation().decide(&soil));
        assert!(!RuleClassifier::fertilization().decide(&soil));
    }

    #[test]
    fn test_each_irrigation_trigger() {
        let rule = RuleClassifier::irrigation();

        let mut dry = healthy_soil();
        dry[SOIL_MOISTURE] = 14.9;
        assert!(rule.decide(&dry));

        let mut hot = healthy_soil();
        hot[SOIL_TEMPERATURE] = 32.5;
        assert!(rule.decide(&hot));

        let mut no_rain = healthy_soil();
        no_rain[SOIL_RAINFALL] = 1.0;
        assert!(rule.decide(&no_rain));
    }

    #[test]
    fn test_each_fertilization_trigger() {
        let rule = RuleClassifier::fertilization();
        for (idx, value) in [(SOIL_N_NO3, 10.0), (SOIL_P, 5.0), (SOIL_K, 60.0)] {
            let mut soil = healthy_soil();
            soil[idx] = value;
            assert!(rule.decide(&soil), "feature {} = {} should trigger", idx, value);
        }
    }

    #[test]
    fn test_predict_checks_length() {
        let rule = RuleClassifier::irrigation();
        let short = ArrayD::from_elem(IxDyn(&[1, 5]), 0.0);
        assert!(rule.predict(short).is_err());

        let soil = ArrayD::from_shape_vec(IxDyn(&[1, SOIL_FEATURE_COUNT]), healthy_soil().to_vec()).unwrap();
        assert_eq!(rule.predict(soil).unwrap(), vec![0.0]);
    }
}
