/*
Pitch
=====

Sounds carry their pitch as a frequency in Hertz. This module holds the
sentinel used for rests and the conversions between MIDI note numbers and
frequencies.

The MIDI formula: hz = reference_hz * 2^((note - reference_note) / 12)
With the standard A440 tuning, A4 (MIDI 69) is 440 Hz and middle C (MIDI 60)
is about 261.63 Hz.
*/

pub mod tuning;

pub use tuning::Tuning;

/// Pitch that marks a sound as a rest (silence).
///
/// `Sound::new` rejects every pitch at or below this value, so rests can only
/// be built through `Sound::rest`.
pub const REST_PITCH_HZ: f64 = -1.0;

/// Highest valid MIDI note number
pub const MAX_MIDI_NOTE: u8 = 127;

/// Convert a MIDI note number to Hertz using A440 tuning
pub fn midi_note_to_hz(note: u8) -> f64 {
    Tuning::A440.midi_note_to_hz(note)
}

/// Nearest MIDI note for a frequency using A440 tuning
pub fn hz_to_midi_note(hz: f64) -> Option<u8> {
    Tuning::A440.hz_to_midi_note(hz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_is_440() {
        assert_eq!(midi_note_to_hz(69), 440.0);
        assert_eq!(hz_to_midi_note(440.0), Some(69));
    }

    #[test]
    fn octaves_double_the_frequency() {
        assert_eq!(midi_note_to_hz(81), 880.0);
        assert_eq!(midi_note_to_hz(57), 220.0);
    }

    #[test]
    fn rest_has_no_midi_note() {
        assert_eq!(hz_to_midi_note(REST_PITCH_HZ), None);
    }
}
