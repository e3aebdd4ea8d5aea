use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, DragSource};

/// How far one keyboard nudge moves the scrubber, in track units
pub const NUDGE_STEP: f64 = 10.0;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    /// Press on the scrub bar: begin a slider drag at an absolute position
    SliderPress(f64),
    /// Drag along the scrub bar to an absolute position
    SliderDrag(f64),
    /// Press on the frame area: begin a spin gesture at a column
    TouchPress(u16),
    /// Drag across the frame area to a column
    TouchDrag(u16),
    /// Mouse button released; ends whichever drag is active
    Release,
    /// Nudge the scrubber left by one step
    NudgeLeft,
    /// Nudge the scrubber right by one step
    NudgeRight,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,

        // Scrubbing
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::NudgeLeft,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NudgeRight,
        (KeyCode::Left, KeyModifiers::NONE) => Action::NudgeLeft,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NudgeRight,

        _ => Action::None,
    }
}

/// Handle a mouse event and return the corresponding action
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match app.hit_test(mouse.column, mouse.row) {
            Some(DragSource::Slider) => Action::SliderPress(app.slider_position_at(mouse.column)),
            Some(DragSource::Frame) => Action::TouchPress(mouse.column),
            None => Action::None,
        },
        // Route drags by where the press landed, not where the pointer is
        // now, so a drag that strays off its region keeps working
        MouseEventKind::Drag(MouseButton::Left) => match app.drag_source {
            Some(DragSource::Slider) => Action::SliderDrag(app.slider_position_at(mouse.column)),
            Some(DragSource::Frame) => Action::TouchDrag(mouse.column),
            None => Action::None,
        },
        MouseEventKind::Up(MouseButton::Left) => Action::Release,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use spinview_core::SceneConfig;

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

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_arrow_keys_nudge() {
        assert_eq!(handle_key_event(key(KeyCode::Left)), Action::NudgeLeft);
        assert_eq!(handle_key_event(key(KeyCode::Char('l'))), Action::NudgeRight);
    }

    #[test]
    fn test_press_on_scrub_track_is_a_slider_press() {
        let app = test_app();
        let action = handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 79, 22),
            &app,
        );
        assert_eq!(action, Action::SliderPress(1000.0));
    }

    #[test]
    fn test_press_on_frame_area_is_a_touch_press() {
        let app = test_app();
        let action = handle_mouse_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 30, 10),
            &app,
        );
        assert_eq!(action, Action::TouchPress(30));
    }

    #[test]
    fn test_drag_routes_by_active_source() {
        let mut app = test_app();
        // no press registered: drags are ignored
        let action = handle_mouse_event(
            mouse(MouseEventKind::Drag(MouseButton::Left), 30, 10),
            &app,
        );
        assert_eq!(action, Action::None);

        app.drag_source = Some(DragSource::Frame);
        // even over the scrub track, a frame drag stays a touch drag
        let action = handle_mouse_event(
            mouse(MouseEventKind::Drag(MouseButton::Left), 30, 22),
            &app,
        );
        assert_eq!(action, Action::TouchDrag(30));
    }

    #[test]
    fn test_release_ends_drags() {
        let app = test_app();
        let action = handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 5, 5), &app);
        assert_eq!(action, Action::Release);
    }
}
