use thiserror::Error;

use crate::model::ElementKind;

pub type Result<T> = core::result::Result<T, Error>;

/// A field value rejected while constructing a [`Sound`](crate::model::Sound).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("pitch must be a positive number, got {0} Hz")]
    Pitch(f64),

    #[error("duration must be a positive number, got {0} s")]
    Duration(f64),
}

/// An element of the wrong kind was handed to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("element {index} must be an instance of {expected}, got {found}")]
pub struct TypeError {
    pub index: usize,
    pub expected: ElementKind,
    pub found: ElementKind,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error("invalid sound at position {index}: {source}")]
    Builder {
        index: usize,
        #[source]
        source: ValidationError,
    },
}
