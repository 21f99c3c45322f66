use std::fmt;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::element::{Element, ElementKind};
use super::{write_list, Sound};
use crate::error::{Error, TypeError};
use crate::pitch::Tuning;

/// An ordered line of sounds (a melody). Duplicates are allowed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoundSequence {
    sounds: Vec<Sound>,
}

impl SoundSequence {
    pub fn new(sounds: impl IntoIterator<Item = Sound>) -> Self {
        Self {
            sounds: sounds.into_iter().collect(),
        }
    }

    /// Build a sequence from dynamically typed elements.
    ///
    /// Fails on the first element that is not a `Sound`; nothing is built
    /// in that case.
    pub fn try_from_elements(
        elements: impl IntoIterator<Item = Element>,
    ) -> Result<Self, TypeError> {
        let sounds = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| match element {
                Element::Sound(sound) => Ok(sound),
                other => Err(TypeError {
                    index,
                    expected: ElementKind::Sound,
                    found: other.kind(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sounds })
    }

    /// Start building a sequence with a fluent API
    pub fn builder() -> SoundSequenceBuilder {
        SoundSequenceBuilder::new()
    }

    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sound> {
        self.sounds.iter()
    }

    /// Total length in seconds, rests included
    pub fn duration_s(&self) -> f64 {
        self.sounds.iter().map(Sound::duration_s).sum()
    }
}

impl fmt::Display for SoundSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SoundSequence(sounds=")?;
        write_list(f, &self.sounds)?;
        f.write_str(")")
    }
}

impl TryFrom<Vec<Element>> for SoundSequence {
    type Error = TypeError;

    fn try_from(elements: Vec<Element>) -> Result<Self, Self::Error> {
        Self::try_from_elements(elements)
    }
}

impl FromIterator<Sound> for SoundSequence {
    fn from_iter<I: IntoIterator<Item = Sound>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a SoundSequence {
    type Item = &'a Sound;
    type IntoIter = std::slice::Iter<'a, Sound>;

    fn into_iter(self) -> Self::IntoIter {
        self.sounds.iter()
    }
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    Sound { pitch_hz: f64, duration_s: f64 },
    Rest { duration_s: f64 },
    Note { note: u8, duration_s: f64 },
}

/// Builder for sound sequences.
///
/// Entries are validated in `build`, which reports the position of the
/// first invalid one.
#[derive(Debug, Clone, Default)]
pub struct SoundSequenceBuilder {
    tuning: Tuning,
    entries: Vec<Entry>,
}

impl SoundSequenceBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Tuning used by `note` entries (default A440)
    pub fn tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Add a sound with an explicit pitch
    pub fn sound(mut self, pitch_hz: f64, duration_s: f64) -> Self {
        self.entries.push(Entry::Sound {
            pitch_hz,
            duration_s,
        });
        self
    }

    /// Add a rest (silence)
    pub fn rest(mut self, duration_s: f64) -> Self {
        self.entries.push(Entry::Rest { duration_s });
        self
    }

    /// Add a sound from a MIDI note number
    pub fn note(mut self, note: u8, duration_s: f64) -> Self {
        self.entries.push(Entry::Note { note, duration_s });
        self
    }

    pub fn build(self) -> Result<SoundSequence, Error> {
        let tuning = self.tuning;
        let sounds = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let sound = match entry {
                    Entry::Sound {
                        pitch_hz,
                        duration_s,
                    } => Sound::new(pitch_hz, duration_s),
                    Entry::Rest { duration_s } => Sound::rest(duration_s),
                    Entry::Note { note, duration_s } => {
                        Sound::from_midi_note_with(note, duration_s, &tuning)
                    }
                };
                sound.map_err(|source| {
                    debug!("rejecting sequence entry {}: {}", index, source);
                    Error::Builder { index, source }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SoundSequence { sounds })
    }
}
