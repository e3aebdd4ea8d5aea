use serde::{Deserialize, Serialize};

/// Per-scene settings, fetched as `{key}_config.json` next to the frames.
///
/// Every field is optional in the manifest; missing fields fall back to the
/// defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    /// Play the frame sequence backwards as the scrubber moves right
    #[serde(default = "default_reverse_frames")]
    pub reverse_frames: bool,
    /// Show the telemetry overlay
    #[serde(default)]
    pub enable_debug: bool,
    /// Rotate the physical frame numbering by this many frames
    #[serde(default = "default_frames_offset")]
    pub frames_offset: u32,
    /// Number of frames in the scene
    #[serde(default)]
    pub frames_count: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            reverse_frames: default_reverse_frames(),
            enable_debug: false,
            frames_offset: default_frames_offset(),
            frames_count: 0,
        }
    }
}

fn default_reverse_frames() -> bool {
    true
}

fn default_frames_offset() -> u32 {
    100
}

impl SceneConfig {
    /// Reject manifests a viewer cannot do anything with.
    pub fn validate(&self) -> crate::Result<()> {
        if self.frames_count == 0 {
            return Err(crate::Error::Config(
                "scene declares no frames (framesCount is 0)".to_string(),
            ));
        }
        Ok(())
    }

    /// Map a logical frame index to the physical frame number used in file
    /// names. Scenes are often shot starting mid-orbit; the offset rotates
    /// the numbering so logical frame 0 faces the intended way.
    pub fn physical_index(&self, logical: u32) -> u32 {
        debug_assert!(self.frames_count > 0);
        (logical + self.frames_offset) % self.frames_count
    }
}
