use std::path::PathBuf;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use super::manifest::SceneConfig;
use crate::config::AppConfig;
use crate::{Error, Result};

/// Fetches scene manifests and frame images from the configured source.
///
/// The source is either an HTTP(S) base URL or a local directory; resources
/// follow the flat `{key}_config.json` / `{key}_{physical}.jpg` layout.
pub struct SceneFetcher {
    client: Client,
    base: String,
}

impl SceneFetcher {
    /// Create a new scene fetcher with configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Self::build_client(config.scene.request_timeout_secs)?;

        Ok(Self {
            client,
            base: config.scene.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_client(timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("spinview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Http)
    }

    /// Whether the source is served over HTTP rather than the filesystem
    pub fn is_remote(&self) -> bool {
        self.base.starts_with("http://") || self.base.starts_with("https://")
    }

    /// Location of a scene's manifest
    pub fn manifest_location(&self, scene_key: &str) -> String {
        format!("{}/{}_config.json", self.base, scene_key)
    }

    /// Location of one physical frame of a scene
    pub fn frame_location(&self, scene_key: &str, physical: u32) -> String {
        format!("{}/{}_{}.jpg", self.base, scene_key, physical)
    }

    /// Fetch and parse a scene's manifest.
    ///
    /// A missing scene (404 or a bucket-style 403) maps to
    /// [`Error::SceneNotFound`]; any other failure status surfaces as a
    /// manifest error with the status text.
    pub async fn fetch_manifest(&self, scene_key: &str) -> Result<SceneConfig> {
        let location = self.manifest_location(scene_key);
        tracing::info!("Fetching scene manifest from: {}", location);

        let bytes = if self.is_remote() {
            let response = self.client.get(&location).send().await?;
            let status = response.status();
            if status == StatusCode::NOT_FOUND || status == StatusCode::FORBIDDEN {
                return Err(Error::SceneNotFound(scene_key.to_string()));
            }
            if !status.is_success() {
                return Err(Error::Manifest(status_text(status)));
            }
            response.bytes().await?.to_vec()
        } else {
            read_local(&location, scene_key).await?
        };

        let config: SceneConfig = serde_json::from_slice(&bytes)?;
        Ok(config)
    }

    /// Fetch the raw bytes of one physical frame.
    pub async fn fetch_frame(&self, scene_key: &str, physical: u32) -> Result<Vec<u8>> {
        let location = self.frame_location(scene_key, physical);

        if self.is_remote() {
            let response = self.client.get(&location).send().await?;
            let response = response.error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        } else {
            read_local(&location, scene_key).await
        }
    }
}

async fn read_local(path: &str, scene_key: &str) -> Result<Vec<u8>> {
    match tokio::fs::read(PathBuf::from(path)).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::SceneNotFound(scene_key.to_string()))
        }
        Err(e) => Err(Error::Io(e)),
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_owned)
        .unwrap_or_else(|| status.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher_with_base(base: &str) -> SceneFetcher {
        let mut config = AppConfig::default();
        config.scene.base_url = base.to_string();
        SceneFetcher::new(&config).unwrap()
    }

    #[test]
    fn test_remote_locations() {
        let fetcher = fetcher_with_base("https://example.com/sets");
        assert!(fetcher.is_remote());
        assert_eq!(
            fetcher.manifest_location("rooftop"),
            "https://example.com/sets/rooftop_config.json"
        );
        assert_eq!(
            fetcher.frame_location("rooftop", 42),
            "https://example.com/sets/rooftop_42.jpg"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let fetcher = fetcher_with_base("https://example.com/sets/");
        assert_eq!(
            fetcher.frame_location("rooftop", 0),
            "https://example.com/sets/rooftop_0.jpg"
        );
    }

    #[test]
    fn test_local_directory_source() {
        let fetcher = fetcher_with_base("/var/scenes");
        assert!(!fetcher.is_remote());
        assert_eq!(
            fetcher.manifest_location("rooftop"),
            "/var/scenes/rooftop_config.json"
        );
    }

    #[tokio::test]
    async fn test_missing_local_scene_maps_to_not_found() {
        let fetcher = fetcher_with_base("/nonexistent-spinview-test-dir");
        let err = fetcher.fetch_manifest("rooftop").await.unwrap_err();
        assert!(matches!(err, Error::SceneNotFound(_)));
    }
}
