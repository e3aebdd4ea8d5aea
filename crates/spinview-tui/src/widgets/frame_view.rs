use image::{DynamicImage, GenericImageView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct FrameViewWidget;

impl FrameViewWidget {
    /// Render the currently shown frame of the scene
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .style(Style::default().bg(theme.bg0))
            .borders(Borders::NONE);
        frame.render_widget(block, area);

        match app.shown_image() {
            Some(image) => Self::render_halfblocks(frame, area, image),
            None => Self::render_waiting(frame, area, app, theme),
        }
    }

    /// Render the pre-frame message while downloads are in flight
    fn render_waiting(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let message = Line::from(Span::styled(
            format!("Loading scene {}...", app.scene_key),
            Style::default()
                .fg(theme.marker)
                .add_modifier(Modifier::BOLD),
        ));
        let paragraph = Paragraph::new(message)
            .style(Style::default().bg(theme.bg0))
            .alignment(ratatui::layout::Alignment::Center);

        // Center vertically
        let y_offset = area.height / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + y_offset,
            width: area.width,
            height: 1,
        };
        frame.render_widget(paragraph, centered_area);
    }

    /// Render a frame using halfblock characters
    fn render_halfblocks(frame: &mut Frame, area: Rect, img: &DynamicImage) {
        // Each character cell represents 2 vertical pixels
        let target_width = area.width as u32;
        let target_height = (area.height as u32) * 2;
        if target_width == 0 || target_height == 0 {
            return;
        }

        // Calculate aspect-ratio preserving dimensions
        let (img_width, img_height) = img.dimensions();
        let scale_w = target_width as f32 / img_width as f32;
        let scale_h = target_height as f32 / img_height as f32;
        let scale = scale_w.min(scale_h);

        let new_width = ((img_width as f32 * scale) as u32).max(1);
        let new_height = ((img_height as f32 * scale) as u32).max(1);

        let resized = img.resize_exact(new_width, new_height, image::imageops::FilterType::Triangle);
        let rgba = resized.to_rgba8();

        // Center the image
        let x_offset = (target_width.saturating_sub(new_width)) / 2;
        let y_offset = (area.height as u32).saturating_sub(new_height / 2) / 2;

        for row in 0..(new_height / 2) {
            let y = row * 2;
            let mut spans: Vec<Span> = Vec::with_capacity(target_width as usize);

            if x_offset > 0 {
                spans.push(Span::raw(" ".repeat(x_offset as usize)));
            }

            for x in 0..new_width {
                let top_pixel = rgba.get_pixel(x, y);
                let bottom_pixel = if y + 1 < new_height {
                    rgba.get_pixel(x, y + 1)
                } else {
                    top_pixel
                };

                let top_color = Color::Rgb(top_pixel[0], top_pixel[1], top_pixel[2]);
                let bottom_color = Color::Rgb(bottom_pixel[0], bottom_pixel[1], bottom_pixel[2]);

                spans.push(Span::styled(
                    "▀",
                    Style::default().fg(top_color).bg(bottom_color),
                ));
            }

            let line_area = Rect {
                x: area.x,
                y: area.y + y_offset as u16 + row as u16,
                width: area.width,
                height: 1,
            };

            if line_area.y < area.y + area.height {
                frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
            }
        }
    }
}
