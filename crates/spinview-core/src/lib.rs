pub mod config;
pub mod error;
pub mod scene;
pub mod scrub;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use scene::{SceneConfig, SceneFetcher};
pub use scrub::{FrameChange, LoadUpdate, ScrubController};
