pub mod cacophony;
pub mod element;
pub mod sequence;
pub mod sound;

use std::fmt;

pub use cacophony::Cacophony;
pub use element::{Element, ElementKind};
pub use sequence::{SoundSequence, SoundSequenceBuilder};
pub use sound::Sound;

/// Write `items` as `[a, b, c]` using each item's `Display` form
pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}
