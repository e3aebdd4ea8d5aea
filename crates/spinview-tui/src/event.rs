use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use image::DynamicImage;

/// Event handler for terminal events.
///
/// Emits a tick on a fixed cadence; input arriving between ticks does not
/// push the next tick back, so coasting advances at a steady rate.
pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

/// Result of an async frame load operation
pub enum FrameLoadResult {
    /// Frame loaded and decoded successfully
    Loaded {
        index: usize,
        image: DynamicImage,
    },
    /// Frame failed to load
    Failed {
        index: usize,
        error: String,
    },
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Poll for the next event
    pub fn next(&mut self) -> Result<Option<AppEvent>> {
        let timeout = self.tick_rate.saturating_sub(self.last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            self.last_tick = Instant::now();
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse input (press, drag, release)
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
