//! Scrub position arithmetic
//!
//! Positions live on a circular track of 1000 units, one unit shy of a full
//! turn at each end: valid positions span `[1.0, 1000.0]` and position 1000
//! is adjacent to position 1.

/// Lowest valid scrub position.
pub const POSITION_MIN: f64 = 1.0;
/// Highest valid scrub position.
pub const POSITION_MAX: f64 = 1000.0;
/// Units per full revolution.
pub const POSITION_RANGE: f64 = 1000.0;
/// Position the scrubber rests at once a scene finishes loading.
pub const POSITION_MIDPOINT: f64 = 500.0;

/// Wrap an arbitrary position onto the `[1.0, 1000.0]` track.
///
/// Works for any finite input, however far outside the track, and is
/// idempotent: `normalize(normalize(p)) == normalize(p)`.
#[inline]
pub fn normalize(position: f64) -> f64 {
    let wrapped = (position - POSITION_MIN).rem_euclid(POSITION_RANGE) + POSITION_MIN;
    // rem_euclid yields [1, 1001); the (1000, 1001) sliver sits within one
    // unit of the top of the track, so fold it onto the endpoint.
    if wrapped > POSITION_MAX {
        POSITION_MAX
    } else {
        wrapped
    }
}

/// Map a normalized position to a frame index in `[0, frames_count - 1]`.
///
/// With `reverse_frames` the track runs backwards through the frame
/// sequence, so dragging right rotates the scene the other way.
#[inline]
pub fn map_to_frame(position: f64, frames_count: u32, reverse_frames: bool) -> usize {
    debug_assert!(frames_count >= 1);
    let oriented = if reverse_frames {
        POSITION_MAX - position
    } else {
        position
    };
    ((oriented / POSITION_RANGE) * (frames_count as f64 - 1.0)).floor() as usize
}
