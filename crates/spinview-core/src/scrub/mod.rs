//! Scrubbing engine: position arithmetic, load tracking, gesture deltas,
//! inertia, and the root controller that ties them together.

pub mod controller;
pub mod gesture;
pub mod inertia;
pub mod loading;
pub mod position;
pub mod telemetry;

pub use controller::{FrameChange, LoadUpdate, ScrubController};
pub use gesture::TouchTracker;
pub use inertia::{InertiaEngine, TICK_INTERVAL};
pub use loading::FrameLoadTracker;
pub use telemetry::Telemetry;
