use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct DebugOverlayWidget;

impl DebugOverlayWidget {
    /// Render the telemetry readout in the top-right corner
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let telemetry = app.controller.telemetry();
        if !telemetry.is_enabled() || telemetry.is_empty() {
            return;
        }
        let theme = &app.theme;

        let lines: Vec<Line> = telemetry
            .iter()
            .map(|(name, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", name), Style::default().fg(theme.grey1)),
                    Span::styled(format_value(value), Style::default().fg(theme.fg0)),
                ])
            })
            .collect();

        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = (content_width + 4).min(area.width);
        let height = (lines.len() as u16 + 2).min(area.height);
        let overlay = Rect {
            x: area.x + area.width.saturating_sub(width),
            y: area.y,
            width,
            height,
        };

        frame.render_widget(Clear, overlay);
        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.bg1))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.track))
                    .title(" debug "),
            );
        frame.render_widget(paragraph, overlay);
    }
}

/// Whole numbers print bare; fractional values keep one decimal
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
