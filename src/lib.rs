pub mod error; // Validation and type errors
pub mod model; // Sound, SoundSequence, Cacophony
pub mod pitch; // Rest sentinel, tuning and MIDI conversion
pub mod playback;

pub use error::{Error, Result, TypeError, ValidationError};
pub use model::{Cacophony, Element, ElementKind, Sound, SoundSequence, SoundSequenceBuilder};
pub use pitch::{Tuning, REST_PITCH_HZ};
pub use playback::Play;
