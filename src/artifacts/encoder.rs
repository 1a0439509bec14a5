use std::collections::HashSet;

use serde::Deserialize;

use crate::error::EncodeError;

/// Maps categorical labels to integer codes.
pub trait CategoryEncoder {
    /// Returns the code of `label`.
    ///
    /// # Errors
    /// Returns `EncodeError` if the label cannot be encoded.
    fn transform(&self, label: &str) -> Result<i64, EncodeError>;
}

/// Label encoder fitted on a fixed list of classes.
///
/// A label's code is its position in `classes`, so an encoder fitted on
/// sorted classes reproduces the usual alphabetical coding.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Creates a validated encoder.
    ///
    /// # Errors
    /// Returns a human-readable reason if the class list is empty or has duplicates.
    pub fn new(classes: Vec<String>) -> Result<Self, String> {
        let encoder = Self { classes };
        encoder.validate()?;
        Ok(encoder)
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("classes must not be empty".into());
        }

        let mut seen = HashSet::with_capacity(self.classes.len());
        for class in &self.classes {
            if !seen.insert(class.as_str()) {
                return Err(format!("duplicate class: {class}"));
            }
        }

        Ok(())
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl CategoryEncoder for LabelEncoder {
    fn transform(&self, label: &str) -> Result<i64, EncodeError> {
        self.classes
            .iter()
            .position(|c| c == label)
            .map(|i| i as i64)
            .ok_or_else(|| EncodeError::UnseenLabel(label.to_string()))
    }
}
