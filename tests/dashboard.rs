use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};

use house_price_dashboard::{
    artifacts::{Artifacts, LabelEncoder, LinearModel, RegressionModel},
    state::{DashboardState, ViewState},
    ui::{
        format,
        screens::{Action, Screen},
    },
};

fn artifacts() -> Artifacts {
    let model = LinearModel::new(
        vec![
            "LotArea".into(),
            "OverallQual".into(),
            "GrLivArea".into(),
            "Neighborhood".into(),
        ],
        10.0,
        vec![0.00001, 0.1, 0.0005, 0.05],
    )
    .unwrap();
    let encoder =
        LabelEncoder::new(vec!["CollgCr".into(), "Edwards".into(), "NAmes".into(), "OldTown".into()])
            .unwrap();

    Artifacts::new(RegressionModel::Linear(model), Some(encoder))
}

fn render(screen: Screen, state: &DashboardState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
    terminal.draw(|f| screen.draw(f, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .iter()
        .map(|c| c.symbol())
        .collect::<Vec<_>>()
        .chunks(width)
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(state: &mut DashboardState, key: KeyCode) -> Action {
    Screen::Dashboard.handle_key(state, key)
}

#[test]
fn first_frame_shows_form_without_results() {
    let a = artifacts();
    let state = DashboardState::new(&a);

    let screen = render(Screen::Dashboard, &state);

    assert!(screen.contains("House Price Predictor"));
    assert!(screen.contains("Lot Area (sqft)"));
    assert!(screen.contains("Land size impact"));
    assert!(screen.contains("Predict Price"));
    assert!(screen.contains("No prediction yet."));
    assert!(!screen.contains("RMSE: 0.31"));
}

#[test]
fn predict_key_shows_metrics_charts_and_summary() {
    let a = artifacts();
    let mut state = DashboardState::new(&a);

    assert!(matches!(press(&mut state, KeyCode::Char('p')), Action::None));

    let price = match state.view() {
        ViewState::Requested(Ok(p)) => p.price,
        other => panic!("unexpected view {other:?}"),
    };

    let screen = render(Screen::Dashboard, &state);
    assert!(screen.contains(&format::price(price)));
    assert!(screen.contains("RMSE: 0.31"));
    assert!(screen.contains("Key Features"));
    assert!(screen.contains("Price vs Build Year"));
    assert!(screen.contains("Property Summary"));
    assert!(screen.contains("10,000"));
}

#[test]
fn enter_on_buttons_predicts_and_resets() {
    let a = artifacts();
    let mut state = DashboardState::new(&a);

    // Up from the first slider wraps to Reset; once more lands on Predict.
    press(&mut state, KeyCode::Up);
    press(&mut state, KeyCode::Up);
    press(&mut state, KeyCode::Enter);
    assert!(state.view().is_requested());

    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.view(), &ViewState::NotRequested);
}

#[test]
fn slider_moves_update_shown_price() {
    let a = artifacts();
    let mut state = DashboardState::new(&a);
    press(&mut state, KeyCode::Char('p'));

    let before = match state.view() {
        ViewState::Requested(Ok(p)) => p.price,
        other => panic!("unexpected view {other:?}"),
    };

    // Overall Quality up by one.
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Right);

    match state.view() {
        ViewState::Requested(Ok(p)) => {
            assert_eq!(p.inputs.overall_qual, 6);
            assert!((p.price / before - 0.1_f64.exp()).abs() < 1e-9);
        }
        other => panic!("unexpected view {other:?}"),
    }
}

#[test]
fn help_screen_round_trip() {
    let a = artifacts();
    let mut state = DashboardState::new(&a);

    let next = match press(&mut state, KeyCode::Char('?')) {
        Action::Transition(next) => next,
        _ => panic!("expected a transition"),
    };
    assert_eq!(next, Screen::ArtifactHelp);

    let screen = render(next, &state);
    assert!(screen.contains("Artifact formats"));
    assert!(screen.contains("house_model.json"));

    assert!(matches!(
        next.handle_key(&mut state, KeyCode::Enter),
        Action::Transition(Screen::Dashboard)
    ));
    assert!(matches!(next.handle_key(&mut state, KeyCode::Char('q')), Action::Quit));
}

#[test]
fn event_panel_toggles() {
    let a = artifacts();
    let mut state = DashboardState::new(&a);

    press(&mut state, KeyCode::Char('e'));
    let screen = render(Screen::Dashboard, &state);
    assert!(screen.contains("Events"));
    assert!(screen.contains("linear model ready: 4 features"));

    press(&mut state, KeyCode::Char('e'));
    assert!(!render(Screen::Dashboard, &state).contains("model ready"));
}

#[test]
fn broken_model_surfaces_an_error_bar() {
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

    press(&mut state, KeyCode::Char('p'));

    assert!(matches!(state.view(), ViewState::Requested(Err(_))));
    let screen = render(Screen::Dashboard, &state);
    assert!(screen.contains("tree 0 references missing node 5"));
    assert!(screen.contains("Prediction failed."));
    assert!(!screen.contains("No prediction yet."));
}

#[test]
fn quit_keys() {
    let a = artifacts();
    let mut state = DashboardState::new(&a);
    assert!(matches!(press(&mut state, KeyCode::Char('q')), Action::Quit));
    assert!(matches!(press(&mut state, KeyCode::Esc), Action::Quit));
}
