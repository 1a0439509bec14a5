//! Terminal dashboard that prices a house with a pretrained regression model.
//!
//! The model and an optional label encoder are read once at startup into an
//! [`artifacts::Artifacts`] handle; [`pipeline::PricePipeline`] borrows it to
//! turn form inputs into a price.

pub mod app;
pub mod artifacts;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod state;
pub mod ui;

pub use artifacts::Artifacts;
pub use config::{ArtifactPaths, Settings};
pub use error::{ArtifactError, EncodeError, ModelError};
pub use pipeline::{PricePipeline, PropertyInputs};
