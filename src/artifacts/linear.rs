use serde::Deserialize;

use crate::error::ModelError;

use super::regressor::{check_feature_names, check_row, Regressor};

/// Ordinary least-squares style model fitted in log-price space.
///
/// ```text
/// y = intercept + Σ coefficients[i] * x[i]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    feature_names: Vec<String>,
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    /// Creates a validated linear model.
    ///
    /// # Errors
    /// Returns a human-readable reason if the coefficients do not line up
    /// with the feature names.
    pub fn new(
        feature_names: Vec<String>,
        intercept: f64,
        coefficients: Vec<f64>,
    ) -> Result<Self, String> {
        let model = Self {
            feature_names,
            intercept,
            coefficients,
        };
        model.validate()?;
        Ok(model)
    }

    pub(super) fn validate(&self) -> Result<(), String> {
        check_feature_names(&self.feature_names)?;

        if self.coefficients.len() != self.feature_names.len() {
            return Err(format!(
                "expected {} coefficients, got {}",
                self.feature_names.len(),
                self.coefficients.len()
            ));
        }

        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("coefficients must be finite".into());
        }

        Ok(())
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl Regressor for LinearModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, row: &[f64]) -> Result<f64, ModelError> {
        check_row(row, self.coefficients.len())?;

        let y = self
            .coefficients
            .iter()
            .zip(row)
            .fold(self.intercept, |acc, (w, x)| acc + w * x);

        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn predicts_weighted_sum() {
        let model = LinearModel::new(names(&["a", "b", "c"]), 0.5, vec![1.0, -2.0, 0.25]).unwrap();
        let y = model.predict(&[4.0, 1.0, 8.0]).unwrap();
        assert_eq!(y, 0.5 + 4.0 - 2.0 + 2.0);
    }

    #[test]
    fn rejects_coefficient_count_mismatch() {
        let err = LinearModel::new(names(&["a", "b"]), 0.0, vec![1.0]).unwrap_err();
        assert!(err.contains("expected 2 coefficients"));
    }

    #[test]
    fn rejects_non_finite_weights() {
        assert!(LinearModel::new(names(&["a"]), f64::NAN, vec![1.0]).is_err());
        assert!(LinearModel::new(names(&["a"]), 0.0, vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn rejects_short_row() {
        let model = LinearModel::new(names(&["a", "b"]), 0.0, vec![1.0, 1.0]).unwrap();
        assert_eq!(
            model.predict(&[1.0]),
            Err(ModelError::ShapeMismatch { got: 1, expected: 2 })
        );
    }
}
