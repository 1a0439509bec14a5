use ratatui::{
    layout::{Alignment, Constraint},
    style::Modifier,
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph,
        Row, Table, Wrap,
    },
};

use crate::pipeline::PropertyInputs;
use crate::state::{DashboardState, Field, InputForm, SliderSpec, SLIDERS};

use super::{format, theme::Theme};

/// Static accuracy label shown next to the price. Not computed.
pub const ACCURACY_LABEL: &str = "RMSE: 0.31";

const SLIDER_WIDTH: usize = 24;

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(format!(" {title} "))
        .title_style(Theme::title())
}

pub fn header<'a>(state: &DashboardState<'a>) -> Paragraph<'a> {
    let encoder = if state.has_encoder() {
        Span::styled("loaded", Theme::dim())
    } else {
        Span::styled("missing", Theme::warn())
    };

    let lines = vec![
        Line::from(Span::styled("House Price Predictor", Theme::title())),
        Line::from(Span::styled("Interactive SAIT AI Dashboard", Theme::dim())),
        Line::from(vec![
            Span::styled(
                format!(
                    "model: {}  |  features: {}  |  encoder: ",
                    state.model_kind(),
                    state.feature_count()
                ),
                Theme::muted(),
            ),
            encoder,
        ]),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(Theme::border()))
}

/// Renders a slider track with a knob at `value`.
pub fn slider_bar(value: u32, spec: &SliderSpec, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let span = spec.max.saturating_sub(spec.min).max(1) as f64;
    let ratio = (value.saturating_sub(spec.min) as f64 / span).clamp(0.0, 1.0);
    let knob = (ratio * (width - 1) as f64).round() as usize;

    (0..width)
        .map(|i| match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

fn slider_value(value: u32, spec: &SliderSpec) -> String {
    if spec.max >= 10_000 {
        format::thousands(value as i64)
    } else {
        value.to_string()
    }
}

pub fn form<'a>(form: &InputForm) -> Paragraph<'a> {
    let focus = form.focus();
    let marker = |field: Field| {
        if field == focus {
            ("▶ ", Theme::focused())
        } else {
            ("  ", Theme::text())
        }
    };

    let mut lines: Vec<Line> = Vec::new();

    for (i, spec) in SLIDERS.iter().enumerate() {
        let (prefix, style) = marker(Field::Slider(i));
        let value = form.value(i);

        let mut head = vec![
            Span::styled(prefix, style),
            Span::styled(format!("{:<18}", spec.label), style),
            Span::styled(format!("{:>7}", slider_value(value, spec)), Theme::metric()),
        ];
        if let Some(help) = spec.help {
            head.push(Span::styled(format!("  {help}"), Theme::muted()));
        }
        lines.push(Line::from(head));

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(slider_bar(value, spec, SLIDER_WIDTH), Theme::chart()),
            Span::styled(
                format!(
                    " {}–{}",
                    slider_value(spec.min, spec),
                    slider_value(spec.max, spec)
                ),
                Theme::muted(),
            ),
        ]));
    }

    let (prefix, style) = marker(Field::Neighborhood);
    lines.push(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(format!("{:<18}", "Neighborhood"), style),
        Span::styled(format!("◀ {} ▶", form.neighborhood()), Theme::metric()),
    ]));
    lines.push(Line::from(""));

    let button = |field: Field, label: &str| {
        let style = if field == focus {
            Theme::focused().add_modifier(Modifier::REVERSED)
        } else {
            Theme::dim()
        };
        Span::styled(format!("[ {label} ]"), style)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        button(Field::Predict, "Predict Price"),
        Span::raw("  "),
        button(Field::Reset, "Reset"),
    ]));

    Paragraph::new(lines).block(panel("Property Inputs"))
}

pub fn placeholder<'a>() -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No prediction yet.", Theme::dim())),
        Line::from(vec![
            Span::styled("Press ", Theme::muted()),
            Span::styled("p", Theme::focused()),
            Span::styled(" or select ", Theme::muted()),
            Span::styled("Predict Price", Theme::focused()),
            Span::styled(" to estimate a price.", Theme::muted()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(panel("Results"))
}

pub fn prediction_failed<'a>() -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Prediction failed.", Theme::error())),
        Line::from(Span::styled(
            "The model could not score these inputs; see the message below.",
            Theme::muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(panel("Results"))
}

/// The three headline metrics: price, accuracy label, feature count.
pub fn metrics<'a>(price: f64, feature_count: usize) -> [Paragraph<'a>; 3] {
    let metric = |title: &'static str, value: String| {
        Paragraph::new(Span::styled(value, Theme::metric()))
            .alignment(Alignment::Center)
            .block(panel(title))
    };

    [
        metric("Predicted Price", format::price(price)),
        metric("Model Accuracy", ACCURACY_LABEL.to_string()),
        metric("Features", feature_count.to_string()),
    ]
}

/// Scaled values shown in the key-features bar chart.
pub fn key_features(inputs: &PropertyInputs) -> [(&'static str, f64); 3] {
    [
        ("Lot Area", inputs.lot_area as f64 / 1000.0),
        ("Quality", inputs.overall_qual as f64),
        ("Living Area", inputs.gr_liv_area as f64 / 100.0),
    ]
}

pub fn key_features_chart<'a>(inputs: &PropertyInputs) -> BarChart<'a> {
    // Bar heights are integers; keep one decimal of resolution.
    let bars = key_features(inputs)
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value((value * 10.0).round() as u64)
                .text_value(format!("{value:.1}"))
                .label(Line::from(*label))
        })
        .collect::<Vec<_>>();

    BarChart::default()
        .block(panel("Key Features"))
        .bar_width(11)
        .bar_gap(2)
        .bar_style(Theme::chart())
        .value_style(Theme::title().add_modifier(Modifier::REVERSED))
        .label_style(Theme::dim())
        .data(BarGroup::default().bars(&bars))
}

/// Single-point scatter of build year against price. The marker size the
/// dashboard would scale by (quality × 10) is shown in the legend.
pub fn price_vs_year<'a>(point: &'a [(f64, f64)], overall_qual: u32) -> Chart<'a> {
    let year = SLIDERS[2];
    let price = point.first().map_or(0.0, |p| p.1);
    let y_max = if price.is_finite() && price > 0.0 {
        price * 1.5
    } else {
        1.0
    };

    let dataset = Dataset::default()
        .name(format!("size {}", overall_qual * 10))
        .marker(symbols::Marker::Block)
        .graph_type(GraphType::Scatter)
        .style(Theme::chart())
        .data(point);

    Chart::new(vec![dataset])
        .block(panel("Price vs Build Year"))
        .x_axis(
            Axis::default()
                .title("year")
                .style(Theme::muted())
                .bounds([year.min as f64, year.max as f64])
                .labels(vec![
                    Span::raw(year.min.to_string()),
                    Span::raw(((year.min + year.max) / 2).to_string()),
                    Span::raw(year.max.to_string()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("price")
                .style(Theme::muted())
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("$0"),
                    Span::raw(format::price(y_max / 2.0)),
                    Span::raw(format::price(y_max)),
                ]),
        )
}

/// Label/value pairs echoed in the property summary.
pub fn summary_rows(inputs: &PropertyInputs) -> Vec<(&'static str, String)> {
    vec![
        ("Lot Area", format::thousands(inputs.lot_area as i64)),
        ("Quality", inputs.overall_qual.to_string()),
        ("Year Built", inputs.year_built.to_string()),
        ("1st Floor", inputs.first_flr_sf.to_string()),
        ("Living Area", inputs.gr_liv_area.to_string()),
        ("Garage", inputs.garage_cars.to_string()),
        ("Neighborhood", inputs.neighborhood.clone()),
    ]
}

pub fn summary_table<'a>(inputs: &PropertyInputs) -> Table<'a> {
    let header = Row::new(vec!["Feature", "Value"])
        .style(Theme::title().add_modifier(Modifier::UNDERLINED));

    let rows = summary_rows(inputs).into_iter().map(|(feature, value)| {
        Row::new(vec![
            Cell::from(feature).style(Theme::dim()),
            Cell::from(value).style(Theme::text()),
        ])
    });

    Table::new(rows, [Constraint::Length(14), Constraint::Min(10)])
        .header(header)
        .block(panel("Property Summary"))
}

pub fn logs<'a>(state: &'a DashboardState<'_>) -> Paragraph<'a> {
    let tail = state.logs().iter().rev().take(8).rev();

    let lines = tail
        .map(|l| {
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), Theme::level(l.level)),
                Span::styled(l.message.as_str(), Theme::text()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(panel("Events"))
        .wrap(Wrap { trim: true })
}

pub fn footer<'a>() -> Paragraph<'a> {
    Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Theme::dim()),
        Span::styled(" focus  ", Theme::muted()),
        Span::styled("←→ PgUp PgDn", Theme::dim()),
        Span::styled(" adjust  ", Theme::muted()),
        Span::styled("p", Theme::dim()),
        Span::styled(" predict  ", Theme::muted()),
        Span::styled("r", Theme::dim()),
        Span::styled(" reset  ", Theme::muted()),
        Span::styled("e", Theme::dim()),
        Span::styled(" events  ", Theme::muted()),
        Span::styled("?", Theme::dim()),
        Span::styled(" artifacts  ", Theme::muted()),
        Span::styled("q", Theme::dim()),
        Span::styled(" quit    ", Theme::muted()),
        Span::styled("SAIT Integrated AI", Theme::muted().add_modifier(Modifier::ITALIC)),
    ]))
    .alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> PropertyInputs {
        PropertyInputs {
            lot_area: 12500,
            overall_qual: 7,
            year_built: 1995,
            first_flr_sf: 1100,
            gr_liv_area: 2150,
            garage_cars: 3,
            neighborhood: "OldTown".into(),
        }
    }

    #[test]
    fn key_features_are_scaled() {
        assert_eq!(
            key_features(&inputs()),
            [("Lot Area", 12.5), ("Quality", 7.0), ("Living Area", 21.5)]
        );
    }

    #[test]
    fn summary_echoes_raw_inputs() {
        let rows = summary_rows(&inputs());
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], ("Lot Area", "12,500".to_string()));
        assert_eq!(rows[2], ("Year Built", "1995".to_string()));
        assert_eq!(rows[6], ("Neighborhood", "OldTown".to_string()));
    }

    #[test]
    fn slider_knob_tracks_value() {
        let quality = SLIDERS[1];
        assert_eq!(slider_bar(1, &quality, 10), "●─────────");
        assert_eq!(slider_bar(10, &quality, 10), "━━━━━━━━━●");
        assert_eq!(slider_bar(5, &quality, 10).chars().position(|c| c == '●'), Some(4));
        assert_eq!(slider_bar(5, &quality, 0), "");
    }
}
