use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use spinview_core::scrub::position::{POSITION_MAX, POSITION_MIN};

use crate::app::App;

pub struct ScrubBarWidget;

impl ScrubBarWidget {
    /// Render the scrub track with a marker at the current position
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.width == 0 {
            return;
        }
        let fraction =
            (app.controller.position() - POSITION_MIN) / (POSITION_MAX - POSITION_MIN);
        let marker_col = (fraction * area.width.saturating_sub(1) as f64).round() as u16;

        let mut spans: Vec<Span> = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            if col == marker_col {
                spans.push(Span::styled("█", Style::default().fg(app.theme.marker)));
            } else {
                spans.push(Span::styled("─", Style::default().fg(app.theme.track)));
            }
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.bg1));
        frame.render_widget(paragraph, area);
    }
}
