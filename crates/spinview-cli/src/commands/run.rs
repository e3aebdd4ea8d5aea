use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use spinview_core::{scrub::TICK_INTERVAL, AppConfig, SceneFetcher};
use spinview_tui::{
    app::{App, DragSource},
    event::{AppEvent, EventHandler, FrameLoadResult},
    input::{handle_key_event, handle_mouse_event, Action, NUDGE_STEP},
    loader::spawn_frame_loads,
    widgets::{
        DebugOverlayWidget, FrameViewWidget, LoadingGaugeWidget, ScrubBarWidget, StatusBarWidget,
    },
};

pub async fn run(config: Arc<AppConfig>, scene_key: String, debug: bool) -> Result<()> {
    let fetcher = Arc::new(SceneFetcher::new(&config)?);

    // Resolve the scene before touching the terminal so failures print cleanly
    let mut scene = fetcher.fetch_manifest(&scene_key).await?;
    if debug {
        scene.enable_debug = true;
    }
    scene.validate()?;
    tracing::info!("Scene {} has {} frames", scene_key, scene.frames_count);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(format!("spinview - {}", scene_key))
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(scene, scene_key);

    // Seed the viewport width before any drag events arrive
    let size = terminal.size()?;
    app.controller.on_viewport_resize(size.width as f64);

    // Kick off frame downloads
    let (load_tx, mut load_rx) = mpsc::unbounded_channel::<FrameLoadResult>();
    spawn_frame_loads(
        Arc::clone(&fetcher),
        &app.scene_key,
        app.controller.scene(),
        config.scene.max_concurrent_loads,
        load_tx,
    );

    let mut event_handler = EventHandler::new(TICK_INTERVAL);

    // Main loop
    loop {
        // Process any completed frame loads (non-blocking)
        while let Ok(result) = load_rx.try_recv() {
            handle_load_result(&mut app, result);
        }

        // Draw UI
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            FrameViewWidget::render(frame, app.layout.frame_area, &app);
            if app.controller.is_loaded() {
                ScrubBarWidget::render(frame, app.layout.scrub_track, &app);
            } else {
                LoadingGaugeWidget::render(frame, app.layout.scrub_track, &app);
            }
            StatusBarWidget::render(frame, app.layout.status_bar, &app);
            DebugOverlayWidget::render(frame, app.layout.frame_area, &app);
        })?;

        // Handle events
        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    handle_action(&mut app, action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app);
                    handle_action(&mut app, action);
                }
                AppEvent::Resize(width, _) => {
                    app.controller.on_viewport_resize(width as f64);
                }
                AppEvent::Tick => {
                    if let Some(change) = app.controller.on_tick() {
                        app.apply_frame_change(change);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Handle completed frame load result
fn handle_load_result(app: &mut App, result: FrameLoadResult) {
    match result {
        FrameLoadResult::Loaded { index, image } => {
            app.store_frame(index, image);
            let update = app.controller.on_frame_loaded(index);
            if let Some(change) = update.frame_change {
                app.apply_frame_change(change);
            }
            if update.just_completed {
                // clear any lingering load noise; the bar takes over
                app.clear_status();
            }
        }
        FrameLoadResult::Failed { index, error } => {
            app.failed_loads += 1;
            app.set_status(format!(" Frame {} failed: {}", index, error));
        }
    }
}

/// Apply an input action to the app
fn handle_action(app: &mut App, action: Action) {
    let now = Instant::now();
    match action {
        Action::Quit => app.quit(),
        Action::SliderPress(position) => {
            app.drag_source = Some(DragSource::Slider);
            app.controller.on_drag_start();
            if let Some(change) = app.controller.on_slide(position, now) {
                app.apply_frame_change(change);
            }
        }
        Action::SliderDrag(position) => {
            if let Some(change) = app.controller.on_slide(position, now) {
                app.apply_frame_change(change);
            }
        }
        Action::TouchPress(column) => {
            app.drag_source = Some(DragSource::Frame);
            if let Some(change) = app.controller.on_touch_move(column as f64, now) {
                app.apply_frame_change(change);
            }
        }
        Action::TouchDrag(column) => {
            if let Some(change) = app.controller.on_touch_move(column as f64, now) {
                app.apply_frame_change(change);
            }
        }
        Action::Release => match app.drag_source.take() {
            Some(DragSource::Slider) => app.controller.on_drag_end(now),
            Some(DragSource::Frame) => app.controller.on_touch_end(now),
            None => {}
        },
        Action::NudgeLeft => {
            let target = app.controller.position() - NUDGE_STEP;
            if let Some(change) = app.controller.on_slide(target, now) {
                app.apply_frame_change(change);
            }
        }
        Action::NudgeRight => {
            let target = app.controller.position() + NUDGE_STEP;
            if let Some(change) = app.controller.on_slide(target, now) {
                app.apply_frame_change(change);
            }
        }
        Action::None => {}
    }
}
