use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level regions of the dashboard.
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    pub logs: Option<Rect>,
    pub footer: Rect,
}

/// Computes the main layout regions.
pub fn vertical(area: Rect, show_logs: bool) -> Regions {
    let mut constraints = vec![Constraint::Length(4), Constraint::Min(12)];
    if show_logs {
        constraints.push(Constraint::Length(10));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    Regions {
        header: chunks[0],
        body: chunks[1],
        logs: show_logs.then(|| chunks[2]),
        footer: chunks[chunks.len() - 1],
    }
}

/// Splits body into (form, results).
pub fn body(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    (cols[0], cols[1])
}

/// Splits results into (metrics, charts, summary).
pub fn results(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(10),
        ])
        .split(area);

    (rows[0], rows[1], rows[2])
}

/// Splits `area` into `n` equal columns.
pub fn columns(area: Rect, n: u16) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n as u32)).collect::<Vec<_>>())
        .split(area)
        .to_vec()
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
