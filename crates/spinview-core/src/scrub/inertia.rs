use std::time::{Duration, Instant};

/// Cadence of the coasting scheduler.
pub const TICK_INTERVAL: Duration = Duration::from_millis(35);

/// A velocity sample older than this no longer represents the gesture.
pub const SPEED_STALENESS: Duration = Duration::from_millis(100);

/// Measured speed is divided by this on release to get the coasting speed.
pub const INERTIA_DAMPING: f64 = 20.0;

/// Measures gesture velocity and drives post-release coasting.
///
/// Speed is estimated from the two most recent position samples, in
/// position units per second. When a gesture ends the engine captures the
/// damped release speed and replays it unchanged on every scheduler tick
/// until the next gesture stops it; coasting does not decay.
#[derive(Debug, Default)]
pub struct InertiaEngine {
    last_sample: Option<(f64, Instant)>,
    measured_speed: f64,
    active: bool,
    coast_speed: f64,
}

impl InertiaEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one position sample and return the updated speed estimate.
    ///
    /// Time is measured in whole milliseconds; samples less than a
    /// millisecond apart measure zero speed rather than dividing by zero.
    pub fn record_sample(&mut self, position: f64, at: Instant) -> f64 {
        if let Some((prev_position, prev_at)) = self.last_sample {
            let dt_ms = at.duration_since(prev_at).as_millis();
            self.measured_speed = if dt_ms > 0 {
                (position - prev_position) / dt_ms as f64 * 1000.0
            } else {
                0.0
            };
        } else {
            self.measured_speed = 0.0;
        }
        self.last_sample = Some((position, at));
        self.measured_speed
    }

    /// Speed of the gesture right now, or 0.0 once the last sample is stale.
    pub fn instantaneous_speed(&self, now: Instant) -> f64 {
        match self.last_sample {
            Some((_, at)) if now.duration_since(at) <= SPEED_STALENESS => self.measured_speed,
            _ => 0.0,
        }
    }

    /// Begin coasting at the damped release speed.
    ///
    /// Clears the sample window, so a fresh gesture starts its speed
    /// estimate from scratch.
    pub fn start(&mut self, now: Instant) {
        self.coast_speed = self.instantaneous_speed(now) / INERTIA_DAMPING;
        self.active = true;
        self.last_sample = None;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Position delta to apply for one scheduler tick; 0.0 while inactive.
    pub fn tick(&self) -> f64 {
        if self.active {
            self.coast_speed
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_50: Duration = Duration::from_millis(50);
    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn test_speed_from_two_samples() {
        let mut engine = InertiaEngine::new();
        let t = Instant::now();
        engine.record_sample(400.0, t);
        // 100 units over 50ms = 2000 units/sec
        let speed = engine.record_sample(500.0, t + MS_50);
        assert_eq!(speed, 2000.0);
        assert_eq!(engine.instantaneous_speed(t + MS_50), 2000.0);
    }

    #[test]
    fn test_first_sample_measures_zero() {
        let mut engine = InertiaEngine::new();
        let t = Instant::now();
        assert_eq!(engine.record_sample(400.0, t), 0.0);
    }

    #[test]
    fn test_same_timestamp_measures_zero() {
        let mut engine = InertiaEngine::new();
        let t = Instant::now();
        engine.record_sample(400.0, t);
        assert_eq!(engine.record_sample(500.0, t), 0.0);
    }

    #[test]
    fn test_negative_speed_for_leftward_motion() {
        let mut engine = InertiaEngine::new();
        let t = Instant::now();
        engine.record_sample(500.0, t);
        assert_eq!(engine.record_sample(400.0, t + MS_50), -2000.0);
    }

    #[test]
    fn test_stale_sample_reads_zero() {
        let mut engine = InertiaEngine::new();
        let t = Instant::now();
        engine.record_sample(400.0, t);
        engine.record_sample(500.0, t + MS_50);
        // exactly at the staleness bound the sample still counts
        assert_eq!(engine.instantaneous_speed(t + MS_50 + MS_100), 2000.0);
        assert_eq!(
            engine.instantaneous_speed(t + MS_50 + MS_100 + Duration::from_millis(1)),
            0.0
        );
    }

    #[test]
    fn test_start_captures_damped_speed() {
        let mut engine = InertiaEngine::new();
        let t = Instant::now();
        engine.record_sample(400.0, t);
        engine.record_sample(500.0, t + MS_50);
        engine.start(t + MS_50);
        assert!(engine.is_active());
        assert_eq!(engine.tick(), 100.0);
        // constant speed: ticks never decay
        assert_eq!(engine.tick(), 100.0);
    }

    #[test]
    fn test_start_after_stale_release_coasts_nowhere() {
        let mut engine = InertiaEngine::new();
        let t = Instant::now();
        engine.record_sample(400.0, t);
        engine.record_sample(500.0, t + MS_50);
        engine.start(t + MS_50 + MS_100 + MS_100);
        assert!(engine.is_active());
        assert_eq!(engine.tick(), 0.0);
    }

    #[test]
    fn test_stop_halts_ticks() {
        let mut engine = InertiaEngine::new();
        let t = Instant::now();
        engine.record_sample(400.0, t);
        engine.record_sample(500.0, t + MS_50);
        engine.start(t + MS_50);
        engine.stop();
        assert!(!engine.is_active());
        assert_eq!(engine.tick(), 0.0);
    }

    #[test]
    fn test_start_clears_sample_window() {
        let mut engine = InertiaEngine::new();
        let t = Instant::now();
        engine.record_sample(400.0, t);
        engine.record_sample(500.0, t + MS_50);
        engine.start(t + MS_50);
        // the next gesture's first sample must not pair with the old window
        assert_eq!(engine.record_sample(900.0, t + MS_50 + MS_50), 0.0);
    }
}
