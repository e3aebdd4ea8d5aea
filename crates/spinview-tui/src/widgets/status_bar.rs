use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let controller = &app.controller;
        let base = Style::default().fg(theme.fg0).bg(theme.bg2);

        let mut spans: Vec<Span> = Vec::new();
        if let Some(msg) = &app.status_message {
            spans.push(Span::styled(msg.clone(), base));
        } else if !controller.is_loaded() {
            spans.push(Span::styled(
                format!(
                    " {} | Loading {}/{}",
                    app.scene_key,
                    controller.loaded_count(),
                    controller.frame_count()
                ),
                base,
            ));
            if app.failed_loads > 0 {
                spans.push(Span::styled(
                    format!(" | {} failed", app.failed_loads),
                    Style::default().fg(theme.error).bg(theme.bg2),
                ));
            }
        } else {
            let frame_text = match app.shown_frame {
                Some(index) => format!("Frame {}/{}", index + 1, controller.frame_count()),
                None => "No frame".to_string(),
            };
            let mut text = format!(" {} | {}", app.scene_key, frame_text);
            if controller.is_coasting() {
                text.push_str(" | coasting");
            }
            spans.push(Span::styled(text, base));
        }

        let help_hint = " q:quit \u{2190}/\u{2192}:step drag:spin ";
        let status_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let padding_len = area
            .width
            .saturating_sub(status_len as u16 + help_hint.chars().count() as u16)
            as usize;

        spans.push(Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)));
        spans.push(Span::styled(
            help_hint,
            Style::default().fg(theme.grey1).bg(theme.bg2),
        ));

        let paragraph = Paragraph::new(Line::from(spans));
        frame.render_widget(paragraph, area);
    }
}
