mod debug_overlay;
mod frame_view;
mod gauge;
mod scrub_bar;
mod status_bar;

pub use debug_overlay::DebugOverlayWidget;
pub use frame_view::FrameViewWidget;
pub use gauge::LoadingGaugeWidget;
pub use scrub_bar::ScrubBarWidget;
pub use status_bar::StatusBarWidget;
