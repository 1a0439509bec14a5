mod encoder;
mod linear;
mod loader;
mod regressor;
mod tree;

pub use encoder::{CategoryEncoder, LabelEncoder};
pub use linear::LinearModel;
pub use loader::{load_encoder, load_model, Artifacts};
pub use regressor::{RegressionModel, Regressor};
pub use tree::{Aggregation, Node, Tree, TreeEnsemble};
