/// Turns an absolute touch-position stream into per-move deltas.
///
/// A gesture's first move has no reference point, so it reports a delta of
/// zero; `reset` ends the gesture and the next move starts a new one.
#[derive(Debug, Default)]
pub struct TouchTracker {
    previous: Option<f64>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next absolute position and return the delta from the
    /// previous one.
    pub fn advance(&mut self, position: f64) -> f64 {
        let delta = match self.previous {
            Some(previous) => position - previous,
            None => 0.0,
        };
        self.previous = Some(position);
        delta
    }

    /// Forget the gesture; the next `advance` reports a zero delta.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.previous.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_has_zero_delta() {
        let mut tracker = TouchTracker::new();
        assert_eq!(tracker.advance(480.0), 0.0);
        assert!(tracker.is_tracking());
    }

    #[test]
    fn test_deltas_follow_motion() {
        let mut tracker = TouchTracker::new();
        tracker.advance(480.0);
        assert_eq!(tracker.advance(500.0), 20.0);
        assert_eq!(tracker.advance(460.0), -40.0);
        assert_eq!(tracker.advance(460.0), 0.0);
    }

    #[test]
    fn test_reset_starts_a_new_gesture() {
        let mut tracker = TouchTracker::new();
        tracker.advance(480.0);
        tracker.advance(520.0);
        tracker.reset();
        assert!(!tracker.is_tracking());
        // no carry-over from the previous gesture
        assert_eq!(tracker.advance(100.0), 0.0);
        assert_eq!(tracker.advance(130.0), 30.0);
    }
}
