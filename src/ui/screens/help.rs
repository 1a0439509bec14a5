use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::config::{DEFAULT_ENCODER_PATH, DEFAULT_MODEL_PATH};
use crate::ui::{layout::centered_rect, theme::Theme};

use super::{Action, Screen};

const EXAMPLE_MODEL: &str = concat!(
    "{\n",
    "  \"kind\": \"linear\",\n",
    "  \"feature_names\": [\"LotArea\", \"OverallQual\", \"YearBuilt\",\n",
    "    \"1stFlrSF\", \"GrLivArea\", \"GarageCars\", \"Neighborhood\"],\n",
    "  \"intercept\": 2.9,\n",
    "  \"coefficients\": [2.5e-6, 0.1, 0.004, 1e-4, 2.5e-4, 0.07, 0.01]\n",
    "}\n",
    "\n",
    "kind values: linear, tree_ensemble\n",
    "tree_ensemble: feature_names, base_score, aggregation (sum | mean),\n",
    "  trees: [{ nodes: [{feature, threshold, left, right} | {value}] }]\n",
    "outputs are log-prices; the dashboard shows exp(output)",
);

const EXAMPLE_ENCODER: &str = concat!(
    "{\n",
    "  \"classes\": [\"CollgCr\", \"Edwards\", \"NAmes\", \"OldTown\"]\n",
    "}\n",
    "\n",
    "code = position in classes; unknown labels and a missing\n",
    "file both encode Neighborhood as 0",
);

pub fn handle_key(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Transition(Screen::Dashboard),
    }
}

pub fn draw(f: &mut Frame) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(70, 90, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(14),
            Constraint::Length(9),
            Constraint::Length(1),
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Artifact formats",
            Theme::title().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    f.render_widget(example(DEFAULT_MODEL_PATH, EXAMPLE_MODEL), chunks[1]);
    f.render_widget(example(DEFAULT_ENCODER_PATH, EXAMPLE_ENCODER), chunks[2]);

    f.render_widget(
        Paragraph::new(Span::styled("any key: back    q: quit", Theme::dim()))
            .alignment(Alignment::Center),
        chunks[3],
    );
}

fn example<'a>(title: &str, content: &'a str) -> Paragraph<'a> {
    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(format!(" {title}: example "))
                .title_style(Theme::title()),
        )
        .style(Theme::dim())
        .wrap(Wrap { trim: false })
}
