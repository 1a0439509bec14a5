use std::{error::Error, fmt, io, path::PathBuf};

/// Failures while reading a model or encoder artifact from disk.
#[derive(Debug)]
pub enum ArtifactError {
    /// The file could not be opened or read.
    Read { path: PathBuf, source: io::Error },
    /// The file is not valid JSON for the expected artifact shape.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The file parsed but violates an artifact invariant.
    Invalid { path: PathBuf, reason: String },
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid artifact '{}': {source}", path.display())
            }
            Self::Invalid { path, reason } => {
                write!(f, "malformed artifact '{}': {reason}", path.display())
            }
        }
    }
}

impl Error for ArtifactError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

/// Errors raised by a regressor when evaluating a feature row.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The row length does not match the declared feature list.
    ShapeMismatch { got: usize, expected: usize },
    /// A tree walked off its node table.
    BrokenTree { tree: usize, node: usize },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::ShapeMismatch { got, expected } => {
                write!(f, "feature row mismatch: got {got} values, expected {expected}")
            }
            ModelError::BrokenTree { tree, node } => {
                write!(f, "tree {tree} references missing node {node}")
            }
        }
    }
}

impl Error for ModelError {}

/// Errors raised by a categorical encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The label was not part of the encoder's fitted classes.
    UnseenLabel(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnseenLabel(label) => write!(f, "unseen label: {label}"),
        }
    }
}

impl Error for EncodeError {}
