use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::pitch::{Tuning, REST_PITCH_HZ};

/// A single sound: a pitch held for a duration.
///
/// Fields are only reachable through accessors, so a `Sound` cannot change
/// after construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SoundFields"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sound {
    pitch_hz: f64,
    duration_s: f64,
}

impl Sound {
    /// Create a sound from a pitch in Hertz and a duration in seconds.
    ///
    /// Fails if the pitch is at or below [`REST_PITCH_HZ`] or the duration is
    /// not positive. Non-finite values are rejected too.
    pub fn new(pitch_hz: f64, duration_s: f64) -> Result<Self, ValidationError> {
        if !pitch_hz.is_finite() || pitch_hz <= REST_PITCH_HZ {
            return Err(ValidationError::Pitch(pitch_hz));
        }
        let duration_s = validate_duration(duration_s)?;
        Ok(Self {
            pitch_hz,
            duration_s,
        })
    }

    /// Create a rest (silence) lasting `duration_s` seconds
    pub fn rest(duration_s: f64) -> Result<Self, ValidationError> {
        let duration_s = validate_duration(duration_s)?;
        Ok(Self {
            pitch_hz: REST_PITCH_HZ,
            duration_s,
        })
    }

    /// Create a sound from a MIDI note number using A440 tuning
    pub fn from_midi_note(note: u8, duration_s: f64) -> Result<Self, ValidationError> {
        Self::from_midi_note_with(note, duration_s, &Tuning::A440)
    }

    pub fn from_midi_note_with(
        note: u8,
        duration_s: f64,
        tuning: &Tuning,
    ) -> Result<Self, ValidationError> {
        Self::new(tuning.midi_note_to_hz(note), duration_s)
    }

    pub fn pitch_hz(&self) -> f64 {
        self.pitch_hz
    }

    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    pub fn is_rest(&self) -> bool {
        self.pitch_hz == REST_PITCH_HZ
    }

    /// Nearest MIDI note under A440 tuning (None for rests)
    pub fn midi_note(&self) -> Option<u8> {
        Tuning::A440.hz_to_midi_note(self.pitch_hz)
    }
}

fn validate_duration(duration_s: f64) -> Result<f64, ValidationError> {
    if duration_s.is_finite() && duration_s > 0.0 {
        Ok(duration_s)
    } else {
        Err(ValidationError::Duration(duration_s))
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting keeps the decimal point on whole numbers (440.0)
        write!(
            f,
            "Sound(pitch_hz={:?}, duration_s={:?})",
            self.pitch_hz, self.duration_s
        )
    }
}

/// Unchecked wire shape; deserialization goes through the same validation as `Sound::new`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SoundFields {
    pitch_hz: f64,
    duration_s: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<SoundFields> for Sound {
    type Error = ValidationError;

    fn try_from(fields: SoundFields) -> Result<Self, Self::Error> {
        if fields.pitch_hz == REST_PITCH_HZ {
            Sound::rest(fields.duration_s)
        } else {
            Sound::new(fields.pitch_hz, fields.duration_s)
        }
    }
}
