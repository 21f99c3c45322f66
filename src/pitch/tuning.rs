use super::MAX_MIDI_NOTE;

/// Reference pitch used to map MIDI note numbers to frequencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Frequency of the reference note in Hertz
    pub reference_hz: f64,
    /// MIDI note number that sounds at `reference_hz`
    pub reference_note: u8,
}

impl Tuning {
    /// Concert pitch: A4 (MIDI 69) = 440 Hz
    pub const A440: Tuning = Tuning {
        reference_hz: 440.0,
        reference_note: 69,
    };

    pub fn with_reference_hz(mut self, reference_hz: f64) -> Self {
        self.reference_hz = reference_hz;
        self
    }

    pub fn with_reference_note(mut self, reference_note: u8) -> Self {
        self.reference_note = reference_note;
        self
    }

    pub fn midi_note_to_hz(&self, note: u8) -> f64 {
        let semitones = note as f64 - self.reference_note as f64;
        self.reference_hz * 2.0_f64.powf(semitones / 12.0)
    }

    /// Nearest MIDI note for `hz`.
    ///
    /// Returns `None` for rests, non-positive or non-finite frequencies, and
    /// for frequencies that round outside the MIDI range.
    pub fn hz_to_midi_note(&self, hz: f64) -> Option<u8> {
        if !hz.is_finite() || hz <= 0.0 {
            return None;
        }
        let note = (self.reference_note as f64 + 12.0 * (hz / self.reference_hz).log2()).round();
        if (0.0..=MAX_MIDI_NOTE as f64).contains(&note) {
            Some(note as u8)
        } else {
            None
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::A440
    }
}
