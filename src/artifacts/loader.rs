use std::{fs::File, io::BufReader, path::Path};

use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::{config::ArtifactPaths, error::ArtifactError};

use super::{
    encoder::LabelEncoder,
    regressor::{RegressionModel, Regressor},
};

/// Read-only handle over the artifacts loaded at startup.
///
/// Built once in `main` and borrowed by the pipeline for the rest of the
/// process; nothing re-reads the files afterwards.
#[derive(Debug, Clone)]
pub struct Artifacts {
    model: RegressionModel,
    encoder: Option<LabelEncoder>,
}

impl Artifacts {
    pub fn new(model: RegressionModel, encoder: Option<LabelEncoder>) -> Self {
        Self { model, encoder }
    }

    /// Loads the model and, best effort, the encoder.
    ///
    /// # Errors
    /// Returns an `ArtifactError` if the model cannot be read, parsed or
    /// validated. Encoder failures are logged and leave the encoder absent.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let model = load_model(&paths.model)?;
        info!(
            "loaded {} model from {} ({} features)",
            model.kind(),
            paths.model.display(),
            model.feature_names().len()
        );

        let encoder = match load_encoder(&paths.encoder) {
            Ok(le) => {
                info!(
                    "loaded label encoder from {} ({} classes)",
                    paths.encoder.display(),
                    le.classes().len()
                );
                Some(le)
            }
            Err(e) => {
                warn!("label encoder unavailable, Neighborhood will encode to 0: {e}");
                None
            }
        };

        Ok(Self { model, encoder })
    }

    pub fn model(&self) -> &RegressionModel {
        &self.model
    }

    pub fn encoder(&self) -> Option<&LabelEncoder> {
        self.encoder.as_ref()
    }
}

/// Reads and validates a regression model artifact.
///
/// # Errors
/// Returns an `ArtifactError` describing the first problem found.
pub fn load_model(path: &Path) -> Result<RegressionModel, ArtifactError> {
    let model: RegressionModel = read_json(path)?;
    model.validate().map_err(|reason| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(model)
}

/// Reads and validates a label encoder artifact.
///
/// # Errors
/// Returns an `ArtifactError` describing the first problem found.
pub fn load_encoder(path: &Path) -> Result<LabelEncoder, ArtifactError> {
    let encoder: LabelEncoder = read_json(path)?;
    encoder.validate().map_err(|reason| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(encoder)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let file = File::open(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
