use anyhow::Result;

use spinview_core::{AppConfig, SceneFetcher};

pub async fn run(config: &AppConfig, scene_key: &str) -> Result<()> {
    let fetcher = SceneFetcher::new(config)?;
    let scene = fetcher.fetch_manifest(scene_key).await?;

    let source = if fetcher.is_remote() { "remote" } else { "local" };

    println!("Scene: {}\n", scene_key);
    println!("  Manifest: {}", fetcher.manifest_location(scene_key));
    println!("  Source: {} ({})", config.scene.base_url, source);
    println!("  Frames: {}", scene.frames_count);
    println!("  Frame offset: {}", scene.frames_offset);
    println!(
        "  Reversed: {}",
        if scene.reverse_frames { "yes" } else { "no" }
    );
    println!(
        "  Debug overlay: {}",
        if scene.enable_debug { "on" } else { "off" }
    );

    if scene.validate().is_ok() {
        println!(
            "  First frame: {}",
            fetcher.frame_location(scene_key, scene.physical_index(0))
        );
        println!(
            "  Last frame: {}",
            fetcher.frame_location(scene_key, scene.physical_index(scene.frames_count - 1))
        );
    } else {
        println!("\n  [ERROR: scene declares no frames]");
    }

    Ok(())
}
