use std::collections::HashSet;

use tracing::warn;

/// Tracks which frames of a scene have finished loading.
///
/// Completions arrive from concurrent downloads in arbitrary order and may
/// repeat; each distinct in-range frame counts once toward the target.
#[derive(Debug)]
pub struct FrameLoadTracker {
    loaded: HashSet<usize>,
    target: usize,
    first_loaded: Option<usize>,
}

impl FrameLoadTracker {
    pub fn new(target: usize) -> Self {
        Self {
            loaded: HashSet::new(),
            target,
            first_loaded: None,
        }
    }

    /// Record a frame completion and return the updated progress fraction.
    ///
    /// Duplicate completions and indices outside `[0, target)` leave the
    /// tracker unchanged.
    pub fn record(&mut self, index: usize) -> f64 {
        if index >= self.target {
            warn!("Ignoring load completion for out-of-range frame {index}");
            return self.progress();
        }
        if self.loaded.insert(index) && self.first_loaded.is_none() {
            self.first_loaded = Some(index);
        }
        self.progress()
    }

    /// Fraction of the target loaded so far, in `[0.0, 1.0]`.
    ///
    /// A zero-frame target is trivially complete, so its progress is 1.0.
    pub fn progress(&self) -> f64 {
        if self.target == 0 {
            1.0
        } else {
            self.loaded.len() as f64 / self.target as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.loaded.len() >= self.target
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// The first frame that ever finished loading, regardless of index order.
    pub fn first_loaded_frame(&self) -> Option<usize> {
        self.first_loaded
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts_distinct_frames() {
        let mut tracker = FrameLoadTracker::new(4);
        assert_eq!(tracker.progress(), 0.0);
        assert_eq!(tracker.record(2), 0.25);
        assert_eq!(tracker.record(0), 0.5);
        assert!(!tracker.is_complete());
        assert_eq!(tracker.record(1), 0.75);
        assert_eq!(tracker.record(3), 1.0);
        assert!(tracker.is_complete());
    }

    #[test]
    fn test_duplicate_completions_count_once() {
        let mut tracker = FrameLoadTracker::new(4);
        tracker.record(2);
        assert_eq!(tracker.record(2), 0.25);
        assert_eq!(tracker.record(2), 0.25);
        assert_eq!(tracker.loaded_count(), 1);
        assert!(!tracker.is_complete());
    }

    #[test]
    fn test_out_of_range_completion_is_ignored() {
        let mut tracker = FrameLoadTracker::new(4);
        assert_eq!(tracker.record(4), 0.0);
        assert_eq!(tracker.record(100), 0.0);
        assert_eq!(tracker.loaded_count(), 0);
        assert_eq!(tracker.first_loaded_frame(), None);
    }

    #[test]
    fn test_first_loaded_frame_is_arrival_order() {
        let mut tracker = FrameLoadTracker::new(10);
        tracker.record(7);
        tracker.record(0);
        tracker.record(3);
        assert_eq!(tracker.first_loaded_frame(), Some(7));
    }

    #[test]
    fn test_zero_target_is_trivially_complete() {
        let tracker = FrameLoadTracker::new(0);
        assert!(tracker.is_complete());
        assert_eq!(tracker.progress(), 1.0);
    }

    #[test]
    fn test_is_loaded() {
        let mut tracker = FrameLoadTracker::new(4);
        tracker.record(1);
        assert!(tracker.is_loaded(1));
        assert!(!tracker.is_loaded(0));
    }
}
