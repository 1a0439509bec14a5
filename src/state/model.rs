use crate::pipeline::PropertyInputs;

/// A price computed from one snapshot of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub price: f64,
    pub inputs: PropertyInputs,
}

/// Whether results are shown.
///
/// Once a prediction has been requested the results stay visible and are
/// recomputed on every interaction until the form is reset.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    NotRequested,
    /// Holds the latest outcome; the error side carries the message shown
    /// in the error bar.
    Requested(Result<Prediction, String>),
}

impl ViewState {
    pub fn is_requested(&self) -> bool {
        matches!(self, ViewState::Requested(_))
    }
}

/// A single entry of the event panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}
