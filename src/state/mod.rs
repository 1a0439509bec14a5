pub mod dashboard;
pub mod form;
pub mod model;

pub use dashboard::DashboardState;
pub use form::{Field, InputForm, SliderSpec, NEIGHBORHOODS, SLIDERS};
pub use model::{LogLine, Prediction, ViewState};
