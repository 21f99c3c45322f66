// Purpose - seam for a future audio output; nothing here produces sound yet

use log::debug;

use crate::model::{Cacophony, Sound, SoundSequence};

/// Something that can be played.
///
/// The implementations for the model types only walk their contents in
/// playing order and emit debug records.
pub trait Play {
    fn play(&self);
}

impl Play for Sound {
    fn play(&self) {
        // TODO: hand the sound to an audio output once one exists
        debug!("play {}", self);
    }
}

impl Play for SoundSequence {
    fn play(&self) {
        debug!("play sequence of {} sounds", self.len());
        for sound in self {
            sound.play();
        }
    }
}

impl Play for Cacophony {
    fn play(&self) {
        debug!("play cacophony of {} sequences", self.len());
        for sequence in self {
            sequence.play();
        }
    }
}
