//! Audio domain: tests for cue keys, volume clamping and the manifest.

use super::{SoundCue, SoundManifest, SoundSettings};

#[test]
fn test_cue_keys_round_trip() {
    for cue in SoundCue::ALL {
        assert_eq!(SoundCue::from_key(cue.key()), Some(cue));
    }
    assert_eq!(SoundCue::from_key("footstep"), None);
}

#[test]
fn test_volume_is_clamped() {
    let mut settings = SoundSettings::default();
    assert_eq!(settings.volume(), 1.0);

    settings.set_volume(0.4);
    assert_eq!(settings.volume(), 0.4);

    settings.set_volume(3.0);
    assert_eq!(settings.volume(), 1.0);

    settings.set_volume(-0.5);
    assert_eq!(settings.volume(), 0.0);

    settings.set_volume(f32::NAN);
    assert_eq!(settings.volume(), 0.0);

    assert_eq!(SoundSettings::new(2.0).volume(), 1.0);
}

#[test]
fn test_manifest_skips_unknown_cues() {
    let manifest = SoundManifest::parse(
        r#"{
            "version": 1,
            "cues": {
                "air_hit": "audio/air_hit.ogg",
                "player_hit": "audio/player_hit.ogg",
                "footstep": "audio/footstep.ogg"
            }
        }"#,
    )
    .expect("manifest should parse");

    let mut paths = manifest.clip_paths();
    paths.sort_by_key(|(cue, _)| cue.key());
    assert_eq!(
        paths,
        vec![
            (SoundCue::AirHit, "audio/air_hit.ogg"),
            (SoundCue::PlayerHit, "audio/player_hit.ogg"),
        ]
    );
}

#[test]
fn test_manifest_rejects_malformed_json() {
    assert!(SoundManifest::parse("{ \"version\": 1 ").is_err());
}
