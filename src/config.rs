use std::{env, path::PathBuf};

pub const DEFAULT_MODEL_PATH: &str = "house_model.json";
pub const DEFAULT_ENCODER_PATH: &str = "label_encoder.json";
pub const DEFAULT_LOG_PATH: &str = "dashboard.log";

const MODEL_PATH_VAR: &str = "HOUSE_MODEL_PATH";
const ENCODER_PATH_VAR: &str = "LABEL_ENCODER_PATH";
const LOG_PATH_VAR: &str = "DASHBOARD_LOG";

/// Locations of the two artifacts read at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub encoder: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            encoder: PathBuf::from(DEFAULT_ENCODER_PATH),
        }
    }
}

/// Process-wide settings, read once in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub artifacts: ArtifactPaths,
    pub log_path: PathBuf,
}

impl Settings {
    /// Reads the settings from the environment, falling back to the fixed
    /// relative paths for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            artifacts: ArtifactPaths {
                model: path(MODEL_PATH_VAR, DEFAULT_MODEL_PATH),
                encoder: path(ENCODER_PATH_VAR, DEFAULT_ENCODER_PATH),
            },
            log_path: path(LOG_PATH_VAR, DEFAULT_LOG_PATH),
        }
    }
}
