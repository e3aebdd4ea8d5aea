use std::time::Instant;

use tracing::debug;

use crate::scene::SceneConfig;

use super::gesture::TouchTracker;
use super::inertia::InertiaEngine;
use super::loading::FrameLoadTracker;
use super::position::{self, POSITION_MIDPOINT};
use super::telemetry::Telemetry;

/// Viewport width assumed until the first resize event arrives.
const INITIAL_FRAMES_WIDTH: f64 = 799.0;

/// A change in which frame the viewer should display.
///
/// At most one frame is ever visible; applying a change hides the previous
/// frame and shows the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameChange {
    /// Frame that was showing, if any.
    pub hidden: Option<usize>,
    /// Frame to show now.
    pub shown: usize,
}

/// Outcome of registering one frame-load completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadUpdate {
    /// Overall load progress in `[0.0, 1.0]`.
    pub progress: f64,
    /// Display change triggered by this completion, if any.
    pub frame_change: Option<FrameChange>,
    /// True exactly once, on the completion that finishes the scene.
    pub just_completed: bool,
}

/// Root state machine for scrubbing a loaded scene.
///
/// Owns the scrub position, the load registry, gesture tracking, and the
/// inertia engine. Input handlers feed events in; display changes come back
/// out as [`FrameChange`] values for the caller to apply. Scrubbing is
/// inert until every frame of the scene has loaded.
pub struct ScrubController {
    scene: SceneConfig,
    position: f64,
    shown_frame: Option<usize>,
    frames_width: f64,
    touch: TouchTracker,
    inertia: InertiaEngine,
    loading: FrameLoadTracker,
    telemetry: Telemetry,
}

impl ScrubController {
    pub fn new(scene: SceneConfig) -> Self {
        let telemetry = Telemetry::new(scene.enable_debug);
        Self {
            loading: FrameLoadTracker::new(scene.frames_count as usize),
            telemetry,
            scene,
            position: POSITION_MIDPOINT,
            shown_frame: None,
            frames_width: INITIAL_FRAMES_WIDTH,
            touch: TouchTracker::new(),
            inertia: InertiaEngine::new(),
        }
    }

    /// Move the scrubber to an absolute position.
    ///
    /// Records a velocity sample, wraps the position onto the track, and
    /// returns the display change if a different frame comes into view.
    /// Does nothing until the scene is fully loaded.
    pub fn on_slide(&mut self, raw: f64, now: Instant) -> Option<FrameChange> {
        if !self.loading.is_complete() {
            return None;
        }
        self.record_speed_sample(raw, now);
        self.apply_position(raw)
    }

    /// Handle one move of a drag gesture over the frame area.
    ///
    /// `page_x` is the absolute horizontal coordinate of the pointer; it is
    /// converted against the viewport width into track units and applied as
    /// a delta relative to the previous move of the same gesture.
    pub fn on_touch_move(&mut self, page_x: f64, now: Instant) -> Option<FrameChange> {
        if page_x == 0.0 {
            return None;
        }
        self.inertia.stop();
        let raw_touch = page_x / self.frames_width * 1000.0;
        self.record_speed_sample(raw_touch, now);
        self.telemetry.record("Touch Position", raw_touch);
        let touch_position = raw_touch.clamp(0.0, 1000.0);
        let delta = self.touch.advance(touch_position);
        self.apply_position(self.position + delta)
    }

    /// End a drag gesture over the frame area and begin coasting.
    pub fn on_touch_end(&mut self, now: Instant) {
        self.touch.reset();
        self.on_drag_end(now);
    }

    /// A drag on the scrub bar started; any coasting stops.
    pub fn on_drag_start(&mut self) {
        self.inertia.stop();
    }

    /// A drag on the scrub bar ended; coast at the damped release speed.
    pub fn on_drag_end(&mut self, now: Instant) {
        self.inertia.start(now);
    }

    /// Advance one scheduler tick; moves the scrubber while coasting.
    ///
    /// Ticks drive the position directly and record no velocity sample;
    /// the sample window stays empty for the whole coast, so a release
    /// during a coast measures only the user's own motion.
    pub fn on_tick(&mut self) -> Option<FrameChange> {
        if !self.inertia.is_active() {
            return None;
        }
        self.apply_position(self.position + self.inertia.tick())
    }

    /// Register that a frame finished loading.
    ///
    /// The first loaded frame is shown immediately so the screen isn't
    /// blank while the rest arrive. The completion that finishes the scene
    /// snaps the scrubber to the midpoint of the track.
    pub fn on_frame_loaded(&mut self, index: usize) -> LoadUpdate {
        let was_complete = self.loading.is_complete();
        let was_empty = self.loading.first_loaded_frame().is_none();
        let progress = self.loading.record(index);
        self.telemetry
            .record("Frames Loaded", self.loading.loaded_count() as f64);

        let mut frame_change = None;
        if was_empty {
            if let Some(first) = self.loading.first_loaded_frame() {
                frame_change = self.show_frame(first);
            }
        }

        let just_completed = !was_complete && self.loading.is_complete();
        if just_completed {
            debug!("All {} frames loaded", self.loading.target());
            frame_change = self.apply_position(POSITION_MIDPOINT).or(frame_change);
        }

        LoadUpdate {
            progress,
            frame_change,
            just_completed,
        }
    }

    /// The viewport was resized; touch coordinates scale against this width.
    pub fn on_viewport_resize(&mut self, width: f64) {
        self.frames_width = width;
        self.telemetry.record("Frames Width", width);
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn shown_frame(&self) -> Option<usize> {
        self.shown_frame
    }

    pub fn progress(&self) -> f64 {
        self.loading.progress()
    }

    pub fn is_loaded(&self) -> bool {
        self.loading.is_complete()
    }

    pub fn loaded_count(&self) -> usize {
        self.loading.loaded_count()
    }

    pub fn frame_count(&self) -> usize {
        self.loading.target()
    }

    pub fn is_coasting(&self) -> bool {
        self.inertia.is_active()
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    /// Record a velocity sample and refresh the speed readout.
    fn record_speed_sample(&mut self, sample_position: f64, now: Instant) {
        let speed = self.inertia.record_sample(sample_position, now);
        self.telemetry.record("Mouse Speed", speed.floor());
    }

    /// Wrap `raw` onto the track, store it, and show the mapped frame.
    fn apply_position(&mut self, raw: f64) -> Option<FrameChange> {
        if !self.loading.is_complete() {
            return None;
        }
        self.position = position::normalize(raw);
        let frame = position::map_to_frame(
            self.position,
            self.scene.frames_count,
            self.scene.reverse_frames,
        );
        self.show_frame(frame)
    }

    /// Make `frame` the displayed frame, reporting the swap if it changed.
    fn show_frame(&mut self, frame: usize) -> Option<FrameChange> {
        self.telemetry.record("Frame Index", frame as f64);
        if self.shown_frame == Some(frame) {
            return None;
        }
        let change = FrameChange {
            hidden: self.shown_frame,
            shown: frame,
        };
        self.shown_frame = Some(frame);
        Some(change)
    }
}
