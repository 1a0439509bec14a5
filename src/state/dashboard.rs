use log::{debug, log, Level};

use crate::{
    artifacts::{Artifacts, Regressor},
    pipeline::PricePipeline,
};

use super::{
    form::InputForm,
    model::{LogLine, Prediction, ViewState},
};

const MAX_LOGS: usize = 200;

/// Everything the dashboard renders, driven by key presses.
pub struct DashboardState<'a> {
    pipeline: PricePipeline<'a>,
    model_kind: &'static str,
    form: InputForm,
    view: ViewState,
    logs: Vec<LogLine>,
    pub show_logs: bool,
}

impl<'a> DashboardState<'a> {
    /// Creates the dashboard over artifacts loaded at startup.
    pub fn new(artifacts: &'a Artifacts) -> Self {
        let pipeline = PricePipeline::from_artifacts(artifacts);
        let model_kind = artifacts.model().kind();

        let mut state = Self {
            pipeline,
            model_kind,
            form: InputForm::new(),
            view: ViewState::NotRequested,
            logs: Vec::new(),
            show_logs: false,
        };

        state.push_log(
            "INFO",
            format!(
                "{model_kind} model ready: {} features",
                artifacts.model().feature_names().len()
            ),
        );
        if !state.pipeline.has_encoder() {
            state.push_log(
                "WARN",
                "no label encoder, Neighborhood encodes to 0".to_string(),
            );
        }

        state
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn logs(&self) -> &[LogLine] {
        &self.logs
    }

    pub fn model_kind(&self) -> &'static str {
        self.model_kind
    }

    pub fn feature_count(&self) -> usize {
        self.pipeline.feature_count()
    }

    pub fn has_encoder(&self) -> bool {
        self.pipeline.has_encoder()
    }

    /// Applies a form edit and, when results are shown, recomputes them.
    pub fn edit(&mut self, f: impl FnOnce(&mut InputForm) -> bool) {
        if f(&mut self.form) && self.view.is_requested() {
            let outcome = self.compute();
            if let Err(e) = &outcome {
                self.push_log("ERROR", e.clone());
            }
            self.view = ViewState::Requested(outcome);
        }
    }

    /// Moves focus without touching any value.
    pub fn focus(&mut self, forward: bool) {
        if forward {
            self.form.focus_next();
        } else {
            self.form.focus_prev();
        }
    }

    /// Switches the view to Requested and computes the price.
    pub fn request_prediction(&mut self) {
        let outcome = self.compute();
        match &outcome {
            Ok(p) => self.push_log("INFO", format!("predicted price {:.0}", p.price)),
            Err(e) => self.push_log("ERROR", e.clone()),
        }
        self.view = ViewState::Requested(outcome);
    }

    /// Restores the form defaults and hides the results.
    pub fn reset(&mut self) {
        self.form.reset();
        self.view = ViewState::NotRequested;
        self.push_log("INFO", "inputs reset".to_string());
    }

    fn compute(&self) -> Result<Prediction, String> {
        let inputs = self.form.inputs();
        match self.pipeline.predict(&inputs) {
            Ok(price) => {
                debug!("{inputs:?} -> {price}");
                Ok(Prediction { price, inputs })
            }
            Err(e) => Err(e.to_string()),
        }
    }

    /// Records an event in the panel and forwards it to the logger once.
    fn push_log(&mut self, level: &'static str, message: String) {
        log!(log_level(level), "{message}");
        self.logs.push(LogLine { level, message });
        if self.logs.len() > MAX_LOGS {
            let drain = self.logs.len() - MAX_LOGS;
            self.logs.drain(0..drain);
        }
    }
}

fn log_level(tag: &str) -> Level {
    match tag {
        "ERROR" => Level::Error,
        "WARN" => Level::Warn,
        "DEBUG" => Level::Debug,
        _ => Level::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{LabelEncoder, LinearModel, RegressionModel};

    fn artifacts(encoder: bool) -> Artifacts {
        let model = LinearModel::new(
            vec!["GrLivArea".into(), "Neighborhood".into()],
            10.0,
            vec![0.001, 0.5],
        )
        .unwrap();
        let encoder = encoder.then(|| {
            LabelEncoder::new(vec!["CollgCr".into(), "NAmes".into()]).unwrap()
        });
        Artifacts::new(RegressionModel::Linear(model), encoder)
    }

    #[test]
    fn starts_without_results() {
        let a = artifacts(true);
        let state = DashboardState::new(&a);

        assert_eq!(state.view(), &ViewState::NotRequested);
        assert_eq!(state.feature_count(), 2);
        assert_eq!(state.logs().len(), 1);
    }

    #[test]
    fn missing_encoder_is_announced() {
        let a = artifacts(false);
        let state = DashboardState::new(&a);

        assert!(!state.has_encoder());
        assert_eq!(state.logs()[1].level, "WARN");
    }

    #[test]
    fn request_computes_exp_of_model_output() {
        let a = artifacts(true);
        let mut state = DashboardState::new(&a);
        state.request_prediction();

        // NAmes encodes to 1, living area defaults to 1700.
        let expected = (10.0 + 1.7 + 0.5_f64).exp();
        match state.view() {
            ViewState::Requested(Ok(p)) => assert!((p.price - expected).abs() < 1e-6),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn edits_recompute_only_once_requested() {
        let a = artifacts(true);
        let mut state = DashboardState::new(&a);

        // Living Area is the fifth slider.
        for _ in 0..4 {
            state.focus(true);
        }
        state.edit(|f| f.nudge(1, true));
        assert_eq!(state.view(), &ViewState::NotRequested);

        state.request_prediction();
        let before = match state.view() {
            ViewState::Requested(Ok(p)) => p.price,
            other => panic!("unexpected view {other:?}"),
        };

        state.edit(|f| f.nudge(1, true));
        match state.view() {
            ViewState::Requested(Ok(p)) => {
                assert_eq!(p.inputs.gr_liv_area, 1900);
                assert!(p.price > before);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn reset_restores_defaults_and_hides_results() {
        let a = artifacts(true);
        let mut state = DashboardState::new(&a);
        state.edit(|f| f.nudge(3, true));
        state.request_prediction();

        state.reset();

        assert_eq!(state.view(), &ViewState::NotRequested);
        assert_eq!(state.form().inputs().lot_area, 10000);
    }

    #[test]
    fn event_log_is_bounded() {
        let a = artifacts(true);
        let mut state = DashboardState::new(&a);
        for _ in 0..(MAX_LOGS + 50) {
            state.request_prediction();
        }
        assert_eq!(state.logs().len(), MAX_LOGS);
    }

    #[test]
    fn panel_tags_map_to_logger_levels() {
        assert_eq!(log_level("ERROR"), Level::Error);
        assert_eq!(log_level("WARN"), Level::Warn);
        assert_eq!(log_level("INFO"), Level::Info);
    }

    #[test]
    fn failed_prediction_is_recorded_once() {
        let model: RegressionModel = serde_json::from_str(
            r#"{
                "kind": "tree_ensemble",
                "feature_names": ["OverallQual"],
                "trees": [ { "nodes": [
                    { "feature": 0, "threshold": 0.0, "left": 5, "right": 5 }
                ] } ]
            }"#,
        )
        .unwrap();
        let a = Artifacts::new(model, None);
        let mut state = DashboardState::new(&a);
        let before = state.logs().len();

        state.request_prediction();

        let errors = state.logs()[before..]
            .iter()
            .filter(|l| l.level == "ERROR")
            .count();
        assert_eq!(errors, 1);
        assert_eq!(state.logs().len(), before + 1);
    }
}
