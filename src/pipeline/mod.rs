pub mod features;
mod predict;

pub use features::{FeatureRow, PropertyInputs, INPUT_COLUMNS};
pub use predict::{encode_neighborhood, PricePipeline, NEIGHBORHOOD_FALLBACK_CODE};
