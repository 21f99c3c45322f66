use std::fmt;

use super::{Cacophony, Sound, SoundSequence};

/// A dynamically typed value handed to the checked container constructors.
///
/// Typed constructors (`SoundSequence::new`, `Cacophony::new`) can only
/// receive the right element type. `Element` covers input whose shape is
/// decided at runtime, where a wrong kind is reported as a `TypeError`.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Number(f64),
    Sound(Sound),
    Sequence(SoundSequence),
    Cacophony(Cacophony),
}

/// The kind of an [`Element`], used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Number,
    Sound,
    SoundSequence,
    Cacophony,
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Number(_) => ElementKind::Number,
            Element::Sound(_) => ElementKind::Sound,
            Element::Sequence(_) => ElementKind::SoundSequence,
            Element::Cacophony(_) => ElementKind::Cacophony,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Number => "number",
            ElementKind::Sound => "Sound",
            ElementKind::SoundSequence => "SoundSequence",
            ElementKind::Cacophony => "Cacophony",
        };
        f.write_str(name)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Number(value)
    }
}

impl From<Sound> for Element {
    fn from(sound: Sound) -> Self {
        Element::Sound(sound)
    }
}

impl From<SoundSequence> for Element {
    fn from(sequence: SoundSequence) -> Self {
        Element::Sequence(sequence)
    }
}

impl From<Cacophony> for Element {
    fn from(cacophony: Cacophony) -> Self {
        Element::Cacophony(cacophony)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let sound = Sound::new(440.0, 1.0).unwrap();
        assert_eq!(Element::from(1.0).kind(), ElementKind::Number);
        assert_eq!(Element::from(sound).kind(), ElementKind::Sound);
        assert_eq!(
            Element::from(SoundSequence::default()).kind(),
            ElementKind::SoundSequence
        );
        assert_eq!(
            Element::from(Cacophony::default()).kind(),
            ElementKind::Cacophony
        );
    }

    #[test]
    fn kind_names() {
        assert_eq!(ElementKind::Number.to_string(), "number");
        assert_eq!(ElementKind::SoundSequence.to_string(), "SoundSequence");
    }
}
