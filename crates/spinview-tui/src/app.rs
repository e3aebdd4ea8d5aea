use image::DynamicImage;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use spinview_core::scrub::position::{POSITION_MAX, POSITION_MIN};
use spinview_core::{FrameChange, SceneConfig, ScrubController};

use crate::theme::Theme;

/// What the active mouse drag started on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// The scrub bar; columns map to absolute track positions
    Slider,
    /// The frame area; columns feed the relative touch path
    Frame,
}

/// Screen regions computed at draw time, kept for mouse hit-testing
#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenLayout {
    pub frame_area: Rect,
    pub scrub_track: Rect,
    pub status_bar: Rect,
}

/// Application state
pub struct App {
    /// Scrubbing engine for the loaded scene
    pub controller: ScrubController,
    /// Key of the scene being viewed
    pub scene_key: String,
    /// Decoded frames, indexed by logical frame number
    pub frames: Vec<Option<DynamicImage>>,
    /// Frame currently displayed, driven by controller frame changes
    pub shown_frame: Option<usize>,
    /// Active mouse drag, if any
    pub drag_source: Option<DragSource>,
    /// Last computed screen layout
    pub layout: ScreenLayout,
    /// Color theme
    pub theme: Theme,
    /// Status message
    pub status_message: Option<String>,
    /// Frames that failed to load
    pub failed_loads: usize,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(scene: SceneConfig, scene_key: String) -> Self {
        let frames = vec![None; scene.frames_count as usize];
        Self {
            controller: ScrubController::new(scene),
            scene_key,
            frames,
            shown_frame: None,
            drag_source: None,
            layout: ScreenLayout::default(),
            theme: Theme::default(),
            status_message: None,
            failed_loads: 0,
            should_quit: false,
        }
    }

    /// Recompute the screen regions for the given terminal area
    pub fn update_layout(&mut self, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);
        self.layout = ScreenLayout {
            frame_area: rows[0],
            scrub_track: rows[1],
            status_bar: rows[2],
        };
    }

    /// Which drag target sits under the given cell, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<DragSource> {
        let position = Position::new(column, row);
        if self.layout.scrub_track.contains(position) {
            Some(DragSource::Slider)
        } else if self.layout.frame_area.contains(position) {
            Some(DragSource::Frame)
        } else {
            None
        }
    }

    /// Map a terminal column on the scrub track to an absolute position
    pub fn slider_position_at(&self, column: u16) -> f64 {
        let rect = self.layout.scrub_track;
        let rel = column.saturating_sub(rect.x) as f64;
        let span = rect.width.saturating_sub(1).max(1) as f64;
        POSITION_MIN + (rel / span).clamp(0.0, 1.0) * (POSITION_MAX - POSITION_MIN)
    }

    /// Swap the displayed frame
    pub fn apply_frame_change(&mut self, change: FrameChange) {
        self.shown_frame = Some(change.shown);
    }

    /// Store a decoded frame
    pub fn store_frame(&mut self, index: usize, image: DynamicImage) {
        if let Some(slot) = self.frames.get_mut(index) {
            *slot = Some(image);
        }
    }

    /// The image to draw this frame, if it has arrived
    pub fn shown_image(&self) -> Option<&DynamicImage> {
        self.shown_frame
            .and_then(|index| self.frames.get(index))
            .and_then(|slot| slot.as_ref())
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let scene = SceneConfig {
            reverse_frames: false,
            enable_debug: false,
            frames_offset: 0,
            frames_count: 36,
        };
        let mut app = App::new(scene, "rooftop".to_string());
        app.update_layout(Rect::new(0, 0, 80, 24));
        app
    }

    #[test]
    fn test_layout_rows() {
        let app = test_app();
        assert_eq!(app.layout.frame_area, Rect::new(0, 0, 80, 22));
        assert_eq!(app.layout.scrub_track, Rect::new(0, 22, 80, 1));
        assert_eq!(app.layout.status_bar, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_hit_test_regions() {
        let app = test_app();
        assert_eq!(app.hit_test(10, 5), Some(DragSource::Frame));
        assert_eq!(app.hit_test(10, 22), Some(DragSource::Slider));
        assert_eq!(app.hit_test(10, 23), None);
        assert_eq!(app.hit_test(100, 5), None);
    }

    #[test]
    fn test_slider_position_spans_the_track() {
        let app = test_app();
        assert_eq!(app.slider_position_at(0), 1.0);
        assert_eq!(app.slider_position_at(79), 1000.0);
        let mid = app.slider_position_at(40);
        assert!(mid > 450.0 && mid < 560.0);
    }

    #[test]
    fn test_apply_frame_change_updates_shown_frame() {
        let mut app = test_app();
        assert_eq!(app.shown_frame, None);
        app.apply_frame_change(FrameChange {
            hidden: None,
            shown: 7,
        });
        assert_eq!(app.shown_frame, Some(7));
    }

    #[test]
    fn test_shown_image_requires_loaded_frame() {
        let mut app = test_app();
        app.apply_frame_change(FrameChange {
            hidden: None,
            shown: 3,
        });
        assert!(app.shown_image().is_none());
        app.store_frame(3, DynamicImage::new_rgb8(4, 4));
        assert!(app.shown_image().is_some());
    }
}
