use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::state::{DashboardState, Field, Prediction, ViewState};
use crate::ui::{layout, theme::Theme, widgets};

use super::{Action, Screen};

pub fn handle_key(state: &mut DashboardState, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Char('?') => return Action::Transition(Screen::ArtifactHelp),

        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => state.focus(false),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => state.focus(true),

        KeyCode::Left | KeyCode::Char('h') => state.edit(|f| f.nudge(-1, false)),
        KeyCode::Right | KeyCode::Char('l') => state.edit(|f| f.nudge(1, false)),
        KeyCode::PageDown => state.edit(|f| f.nudge(-1, true)),
        KeyCode::PageUp => state.edit(|f| f.nudge(1, true)),
        KeyCode::Home => state.edit(|f| f.jump(false)),
        KeyCode::End => state.edit(|f| f.jump(true)),

        KeyCode::Enter | KeyCode::Char(' ') => match state.form().focus() {
            Field::Predict => state.request_prediction(),
            Field::Reset => state.reset(),
            _ => state.focus(true),
        },
        KeyCode::Char('p') => state.request_prediction(),
        KeyCode::Char('r') => state.reset(),
        KeyCode::Char('e') => state.show_logs = !state.show_logs,
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, state: &DashboardState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let regions = layout::vertical(area, state.show_logs);
    let (form_area, results_area) = layout::body(regions.body);

    f.render_widget(widgets::header(state), regions.header);
    f.render_widget(widgets::form(state.form()), form_area);

    match state.view() {
        ViewState::NotRequested => f.render_widget(widgets::placeholder(), results_area),
        ViewState::Requested(Ok(prediction)) => {
            draw_results(f, results_area, prediction, state.feature_count())
        }
        ViewState::Requested(Err(msg)) => {
            f.render_widget(widgets::prediction_failed(), results_area);
            draw_error_bar(f, area, msg);
        }
    }

    if let Some(logs) = regions.logs {
        f.render_widget(widgets::logs(state), logs);
    }
    f.render_widget(widgets::footer(), regions.footer);
}

fn draw_results(f: &mut Frame, area: Rect, prediction: &Prediction, feature_count: usize) {
    let (metrics_area, charts_area, summary_area) = layout::results(area);

    let metric_cols = layout::columns(metrics_area, 3);
    for (metric, col) in widgets::metrics(prediction.price, feature_count)
        .into_iter()
        .zip(metric_cols)
    {
        f.render_widget(metric, col);
    }

    let chart_cols = layout::columns(charts_area, 2);
    let inputs = &prediction.inputs;
    f.render_widget(widgets::key_features_chart(inputs), chart_cols[0]);

    let point = [(inputs.year_built as f64, prediction.price)];
    f.render_widget(
        widgets::price_vs_year(&point, inputs.overall_qual),
        chart_cols[1],
    );

    f.render_widget(widgets::summary_table(inputs), summary_area);
}

fn draw_error_bar(f: &mut Frame, area: Rect, msg: &str) {
    let bar = Rect {
        x: area.x + 1,
        y: area.y + area.height.saturating_sub(2),
        width: area.width.saturating_sub(2),
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ✖ ", Theme::error()),
            Span::styled(msg, Theme::error()),
        ])),
        bar,
    );
}
