use std::time::Duration;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use ratatui::Frame;

use super::fmt::human_readable;
use super::View;
use crate::history::History;
use crate::mode::Panel;

/// Draws every panel of the mode, stacked top to bottom inside a frame
/// titled with the banner.
pub(crate) fn draw(frame: &mut Frame, view: &View, history: &History) {
    let outer = Block::bordered().title(format!(" {} ", view.banner()));
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let panels = view.mode.panels();
    let areas = Layout::vertical(panels.iter().map(|_| Constraint::Fill(1))).split(inner);

    for (panel, area) in panels.iter().zip(areas.iter()) {
        draw_panel(frame, *area, panel, view.period, history);
    }
}

fn draw_panel(frame: &mut Frame, area: Rect, panel: &Panel, period: Duration, history: &History) {
    let points = points(panel, history);
    let (y_max, y_labels) = match panel {
        Panel::Value { dims, .. } => {
            let max = max_value(dims, history);
            (max.max(1) as f64, ["0".to_string(), human_readable(max)])
        }
        Panel::Ratio { .. } => (100.0, ["0%".to_string(), "100%".to_string()]),
    };
    let x_labels = [window_label(history.len(), period), "0".to_string()];

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&points);
    let block = Block::bordered()
        .title(format!(" {} ", panel.title()))
        .title_bottom(" q: quit ");
    let axis_style = Style::default().fg(Color::DarkGray);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, x_max(history)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// One point per history entry, oldest at `x = 0`.
pub(crate) fn points(panel: &Panel, history: &History) -> Vec<(f64, f64)> {
    history
        .iter()
        .enumerate()
        .map(|(x, delta)| (x as f64, panel.value(delta)))
        .collect()
}

fn max_value(dims: &[usize], history: &History) -> u64 {
    history.iter().map(|delta| delta.sum(dims)).max().unwrap_or(0)
}

fn x_max(history: &History) -> f64 {
    history.len().saturating_sub(1).max(1) as f64
}

/// How far back the chart reaches, in whole seconds.
pub(crate) fn window_label(len: usize, period: Duration) -> String {
    format!("-{}s", len as u128 * period.as_millis() / 1000)
}
