use ratatui::{layout::Rect, style::Style, widgets::Gauge, Frame};

use crate::app::App;

pub struct LoadingGaugeWidget;

impl LoadingGaugeWidget {
    /// Render load progress; takes the scrub bar's row until the scene is ready
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let controller = &app.controller;
        let label = format!(
            "Loading frames {}/{}",
            controller.loaded_count(),
            controller.frame_count()
        );
        let gauge = Gauge::default()
            .ratio(controller.progress())
            .label(label)
            .gauge_style(Style::default().fg(app.theme.accent).bg(app.theme.bg2))
            .style(Style::default().bg(app.theme.bg1));
        frame.render_widget(gauge, area);
    }
}
