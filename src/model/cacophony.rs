use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::element::{Element, ElementKind};
use super::{write_list, SoundSequence};
use crate::error::TypeError;

/// A collection of sound sequences, one per musical line.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cacophony {
    sound_sequence_list: Vec<SoundSequence>,
}

impl Cacophony {
    pub fn new(sequences: impl IntoIterator<Item = SoundSequence>) -> Self {
        Self {
            sound_sequence_list: sequences.into_iter().collect(),
        }
    }

    /// Build a cacophony from dynamically typed elements.
    ///
    /// Fails on the first element that is not a `SoundSequence`.
    pub fn try_from_elements(
        elements: impl IntoIterator<Item = Element>,
    ) -> Result<Self, TypeError> {
        let sound_sequence_list = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| match element {
                Element::Sequence(sequence) => Ok(sequence),
                other => Err(TypeError {
                    index,
                    expected: ElementKind::SoundSequence,
                    found: other.kind(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            sound_sequence_list,
        })
    }

    pub fn sound_sequence_list(&self) -> &[SoundSequence] {
        &self.sound_sequence_list
    }

    pub fn len(&self) -> usize {
        self.sound_sequence_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sound_sequence_list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SoundSequence> {
        self.sound_sequence_list.iter()
    }

    /// Length of the longest line in seconds
    pub fn duration_s(&self) -> f64 {
        self.sound_sequence_list
            .iter()
            .map(SoundSequence::duration_s)
            .fold(0.0, f64::max)
    }
}

impl fmt::Display for Cacophony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cacophony(sound_sequence_list=")?;
        write_list(f, &self.sound_sequence_list)?;
        f.write_str(")")
    }
}

impl TryFrom<Vec<Element>> for Cacophony {
    type Error = TypeError;

    fn try_from(elements: Vec<Element>) -> Result<Self, Self::Error> {
        Self::try_from_elements(elements)
    }
}

impl FromIterator<SoundSequence> for Cacophony {
    fn from_iter<I: IntoIterator<Item = SoundSequence>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Cacophony {
    type Item = &'a SoundSequence;
    type IntoIter = std::slice::Iter<'a, SoundSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sound_sequence_list.iter()
    }
}
