use std::sync::Arc;

use image::DynamicImage;
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, warn};

use spinview_core::{SceneConfig, SceneFetcher};

use crate::event::FrameLoadResult;

/// Spawn one download task per frame of the scene.
///
/// Tasks run concurrently up to `max_concurrent` and report through `tx`
/// as they finish, in whatever order the network delivers them.
pub fn spawn_frame_loads(
    fetcher: Arc<SceneFetcher>,
    scene_key: &str,
    scene: &SceneConfig,
    max_concurrent: usize,
    tx: mpsc::UnboundedSender<FrameLoadResult>,
) {
    debug!(
        "Spawning {} frame loads for scene {}",
        scene.frames_count, scene_key
    );
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));

    for index in 0..scene.frames_count as usize {
        let physical = scene.physical_index(index as u32);
        let fetcher = Arc::clone(&fetcher);
        let semaphore = Arc::clone(&semaphore);
        let scene_key = scene_key.to_string();
        let tx = tx.clone();

        tokio::spawn(async move {
            let _permit = match semaphore.acquire().await {
                Ok(permit) => permit,
                Err(_) => return,
            };
            let result = match load_frame(&fetcher, &scene_key, physical).await {
                Ok(image) => FrameLoadResult::Loaded { index, image },
                Err(e) => {
                    warn!("Frame {} of scene {} failed to load: {}", index, scene_key, e);
                    FrameLoadResult::Failed {
                        index,
                        error: e.to_string(),
                    }
                }
            };
            // receiver may be gone if the app quit mid-load
            let _ = tx.send(result);
        });
    }
}

async fn load_frame(
    fetcher: &SceneFetcher,
    scene_key: &str,
    physical: u32,
) -> anyhow::Result<DynamicImage> {
    let bytes = fetcher.fetch_frame(scene_key, physical).await?;
    let image = image::load_from_memory(&bytes)?;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    use spinview_core::AppConfig;

    fn scene_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("spinview-loader-{}-{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn fetcher_for(dir: &PathBuf) -> Arc<SceneFetcher> {
        let mut config = AppConfig::default();
        config.scene.base_url = dir.to_str().unwrap().to_string();
        Arc::new(SceneFetcher::new(&config).unwrap())
    }

    fn encoded_test_frame() -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::new_rgb8(2, 2)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_local_frames_load_and_decode() {
        let dir = scene_dir("ok");
        std::fs::write(dir.join("rooftop_2.jpg"), encoded_test_frame()).unwrap();
        std::fs::write(dir.join("rooftop_0.jpg"), encoded_test_frame()).unwrap();
        std::fs::write(dir.join("rooftop_1.jpg"), encoded_test_frame()).unwrap();

        let scene = SceneConfig {
            reverse_frames: false,
            enable_debug: false,
            frames_offset: 2,
            frames_count: 3,
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_frame_loads(fetcher_for(&dir), "rooftop", &scene, 2, tx);

        let mut loaded = Vec::new();
        while let Some(result) = rx.recv().await {
            match result {
                FrameLoadResult::Loaded { index, image } => {
                    assert_eq!(image.width(), 2);
                    loaded.push(index);
                }
                FrameLoadResult::Failed { index, error } => {
                    panic!("frame {index} failed: {error}");
                }
            }
        }
        loaded.sort_unstable();
        assert_eq!(loaded, vec![0, 1, 2]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_frame_reports_failure() {
        let dir = scene_dir("missing");
        let scene = SceneConfig {
            reverse_frames: false,
            enable_debug: false,
            frames_offset: 0,
            frames_count: 1,
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_frame_loads(fetcher_for(&dir), "ghost", &scene, 4, tx);

        assert!(matches!(
            rx.recv().await,
            Some(FrameLoadResult::Failed { index: 0, .. })
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_undecodable_frame_reports_failure() {
        let dir = scene_dir("garbage");
        std::fs::write(dir.join("noise_0.jpg"), b"not an image").unwrap();

        let scene = SceneConfig {
            reverse_frames: false,
            enable_debug: false,
            frames_offset: 0,
            frames_count: 1,
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_frame_loads(fetcher_for(&dir), "noise", &scene, 4, tx);

        assert!(matches!(
            rx.recv().await,
            Some(FrameLoadResult::Failed { index: 0, .. })
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
