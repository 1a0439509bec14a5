use log::debug;

use crate::{
    artifacts::{Artifacts, CategoryEncoder, LabelEncoder, RegressionModel, Regressor},
    error::ModelError,
};

use super::features::{FeatureRow, PropertyInputs, NEIGHBORHOOD};

/// Code used for Neighborhood when no encoder is loaded or the label is unknown.
pub const NEIGHBORHOOD_FALLBACK_CODE: f64 = 0.0;

/// Encodes a Neighborhood label, falling back to
/// [`NEIGHBORHOOD_FALLBACK_CODE`] instead of failing.
pub fn encode_neighborhood<E: CategoryEncoder>(encoder: Option<&E>, label: &str) -> f64 {
    let Some(encoder) = encoder else {
        return NEIGHBORHOOD_FALLBACK_CODE;
    };

    match encoder.transform(label) {
        Ok(code) => code as f64,
        Err(e) => {
            debug!("{e}, encoding {NEIGHBORHOOD} as {NEIGHBORHOOD_FALLBACK_CODE}");
            NEIGHBORHOOD_FALLBACK_CODE
        }
    }
}

/// Turns form inputs into a price using a borrowed model and encoder.
pub struct PricePipeline<'a, M = RegressionModel, E = LabelEncoder> {
    model: &'a M,
    encoder: Option<&'a E>,
}

impl<'a> PricePipeline<'a> {
    pub fn from_artifacts(artifacts: &'a Artifacts) -> Self {
        Self::new(artifacts.model(), artifacts.encoder())
    }
}

impl<'a, M: Regressor, E: CategoryEncoder> PricePipeline<'a, M, E> {
    pub fn new(model: &'a M, encoder: Option<&'a E>) -> Self {
        Self { model, encoder }
    }

    pub fn model(&self) -> &'a M {
        self.model
    }

    pub fn has_encoder(&self) -> bool {
        self.encoder.is_some()
    }

    /// Number of features the model declares.
    pub fn feature_count(&self) -> usize {
        self.model.feature_names().len()
    }

    /// Builds the row handed to the model: the seven inputs with
    /// Neighborhood encoded, reindexed to the model's feature order.
    pub fn feature_row(&self, inputs: &PropertyInputs) -> FeatureRow {
        let code = encode_neighborhood(self.encoder, &inputs.neighborhood);

        let mut table = Vec::with_capacity(7);
        table.extend(inputs.numeric_columns());
        table.push((NEIGHBORHOOD, code));

        FeatureRow::reindex(&table, self.model.feature_names())
    }

    /// Raw model output in log-price space.
    ///
    /// # Errors
    /// Returns `ModelError` if the model rejects the row.
    pub fn predict_log(&self, inputs: &PropertyInputs) -> Result<f64, ModelError> {
        let row = self.feature_row(inputs);
        self.model.predict(row.values())
    }

    /// Predicted price: `exp` of the model output. Not clamped.
    ///
    /// # Errors
    /// Returns `ModelError` if the model rejects the row.
    pub fn predict(&self, inputs: &PropertyInputs) -> Result<f64, ModelError> {
        Ok(self.predict_log(inputs)?.exp())
    }
}
