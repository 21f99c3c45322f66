#![cfg(feature = "serde")]

use cacophony::{Cacophony, Sound, SoundSequence};

#[test]
fn sequence_with_rest_round_trips() {
    let sequence = SoundSequence::new([Sound::new(440.0, 1.0).unwrap(), Sound::rest(0.5).unwrap()]);

    let json = serde_json::to_string(&sequence).unwrap();
    assert_eq!(
        json,
        r#"{"sounds":[{"pitch_hz":440.0,"duration_s":1.0},{"pitch_hz":-1.0,"duration_s":0.5}]}"#
    );

    let decoded: SoundSequence = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, sequence);
    assert!(decoded.sounds()[1].is_rest());
}

#[test]
fn cacophony_round_trips() {
    let melody = SoundSequence::builder().note(60, 0.5).rest(0.25).build().unwrap();
    let cacophony = Cacophony::new([melody.clone(), melody]);

    let json = serde_json::to_string(&cacophony).unwrap();
    let decoded: Cacophony = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, cacophony);
}

#[test]
fn pitch_below_rest_sentinel_is_rejected() {
    let err = serde_json::from_str::<Sound>(r#"{"pitch_hz":-5.0,"duration_s":1.0}"#).unwrap_err();
    assert!(err.to_string().contains("pitch must be a positive number"));
}

#[test]
fn non_positive_duration_is_rejected() {
    let err = serde_json::from_str::<Sound>(r#"{"pitch_hz":440.0,"duration_s":0.0}"#).unwrap_err();
    assert!(err.to_string().contains("duration must be a positive number"));

    // A rest still needs a positive duration
    assert!(serde_json::from_str::<Sound>(r#"{"pitch_hz":-1.0,"duration_s":0.0}"#).is_err());
}

#[test]
fn invalid_sound_inside_a_sequence_is_rejected() {
    let json = r#"{"sounds":[{"pitch_hz":440.0,"duration_s":1.0},{"pitch_hz":-5.0,"duration_s":1.0}]}"#;
    assert!(serde_json::from_str::<SoundSequence>(json).is_err());
}
