use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ModelError;

use super::{linear::LinearModel, tree::TreeEnsemble};

/// A trained regressor evaluated on a single fixed-schema feature row.
///
/// Implementations only evaluate; they do not know where the row came from
/// or what space the output lives in (the pipeline owns the inverse-log step).
pub trait Regressor {
    /// Ordered names of the features the model was fitted on.
    fn feature_names(&self) -> &[String];

    /// Evaluates the model on one row laid out in `feature_names()` order.
    ///
    /// # Errors
    /// Returns `ModelError` if the row does not match the declared schema.
    fn predict(&self, row: &[f64]) -> Result<f64, ModelError>;
}

/// Every regressor kind the dashboard can read from disk.
///
/// The on-disk JSON selects the variant through its `kind` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionModel {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

impl RegressionModel {
    /// Checks the invariants serde cannot express.
    ///
    /// # Errors
    /// Returns a human-readable reason if the model is unusable.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Linear(m) => m.validate(),
            Self::TreeEnsemble(m) => m.validate(),
        }
    }

    /// Short name shown in the dashboard.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::TreeEnsemble(_) => "tree_ensemble",
        }
    }
}

impl Regressor for RegressionModel {
    fn feature_names(&self) -> &[String] {
        match self {
            Self::Linear(m) => m.feature_names(),
            Self::TreeEnsemble(m) => m.feature_names(),
        }
    }

    fn predict(&self, row: &[f64]) -> Result<f64, ModelError> {
        match self {
            Self::Linear(m) => m.predict(row),
            Self::TreeEnsemble(m) => m.predict(row),
        }
    }
}

pub(super) fn check_feature_names(names: &[String]) -> Result<(), String> {
    if names.is_empty() {
        return Err("feature_names must not be empty".into());
    }

    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(format!("duplicate feature name: {name}"));
        }
    }

    Ok(())
}

pub(super) fn check_row(row: &[f64], expected: usize) -> Result<(), ModelError> {
    if row.len() != expected {
        return Err(ModelError::ShapeMismatch {
            got: row.len(),
            expected,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reads_linear_kind() {
        let json = r#"{
            "kind": "linear",
            "feature_names": ["a", "b"],
            "intercept": 1.0,
            "coefficients": [2.0, 3.0]
        }"#;

        let model: RegressionModel = serde_json::from_str(json).unwrap();
        model.validate().unwrap();

        assert_eq!(model.kind(), "linear");
        assert_eq!(model.feature_names(), names(&["a", "b"]).as_slice());
        assert_eq!(model.predict(&[1.0, 1.0]).unwrap(), 6.0);
    }

    #[test]
    fn rejects_unknown_kind() {
        let json = r#"{ "kind": "svm", "feature_names": ["a"] }"#;
        assert!(serde_json::from_str::<RegressionModel>(json).is_err());
    }

    #[test]
    fn feature_names_must_be_unique_and_present() {
        assert!(check_feature_names(&[]).is_err());
        assert!(check_feature_names(&names(&["a", "a"])).is_err());
        assert!(check_feature_names(&names(&["a", "b"])).is_ok());
    }

    #[test]
    fn row_length_is_checked() {
        assert_eq!(
            check_row(&[1.0], 2),
            Err(ModelError::ShapeMismatch { got: 1, expected: 2 })
        );
        assert!(check_row(&[1.0, 2.0], 2).is_ok());
    }
}
