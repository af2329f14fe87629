//! Audio domain: volume setting and loaded clip handles.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use super::cues::SoundCue;

/// Master volume for one-shot cues, always within `[0, 1]`.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SoundSettings {
    volume: f32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self { volume: 1.0 }
    }
}

impl SoundSettings {
    pub fn new(volume: f32) -> Self {
        let mut settings = Self::default();
        settings.set_volume(volume);
        settings
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        // NaN counts as silence
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
    }
}

/// Raw manifest JSON structure.
#[derive(Debug, Deserialize)]
pub struct SoundManifest {
    pub version: u32,
    /// Cue key to clip path, relative to assets/
    pub cues: HashMap<String, String>,
}

impl SoundManifest {
    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Clip paths for known cues. Unknown keys are reported and skipped.
    pub fn clip_paths(&self) -> Vec<(SoundCue, &str)> {
        let mut paths = Vec::new();
        for (key, path) in &self.cues {
            match SoundCue::from_key(key) {
                Some(cue) => paths.push((cue, path.as_str())),
                None => warn!("Sound manifest names unknown cue '{}'", key),
            }
        }
        paths
    }
}

/// Loaded clip handles by cue. A cue without a clip plays nothing.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    clips: HashMap<SoundCue, Handle<AudioSource>>,
}

impl SoundBank {
    pub fn get(&self, cue: SoundCue) -> Option<Handle<AudioSource>> {
        self.clips.get(&cue).cloned()
    }

    pub fn insert(&mut self, cue: SoundCue, clip: Handle<AudioSource>) {
        self.clips.insert(cue, clip);
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Load every clip named in the manifest at `path`.
    ///
    /// A missing or unreadable manifest leaves the bank empty.
    pub fn load_from_file(&mut self, path: &str, asset_server: &AssetServer) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!("Sound manifest not found at {:?}, cues will be silent", path);
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sound manifest: {}", e);
                return;
            }
        };

        let manifest = match SoundManifest::parse(&contents) {
            Ok(m) => m,
            Err(e) => {
                error!("Failed to parse sound manifest: {}", e);
                return;
            }
        };

        for (cue, clip_path) in manifest.clip_paths() {
            self.insert(cue, asset_server.load(clip_path.to_string()));
        }

        info!(
            "Loaded sound manifest v{} with {} cues",
            manifest.version,
            self.len()
        );
    }
}
