mod fetcher;
mod manifest;

pub use fetcher::SceneFetcher;
pub use manifest::SceneConfig;
