use std::result;

use thiserror::Error;

use crate::{Tag, ValueKind};

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for item and sequence access.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Sequence {0} not found")]
    SequenceNotFound(Tag),

    #[error("Element {0} is not a sequence")]
    NotASequence(Tag),

    #[error("Item index {index} out of range for sequence {tag} with {len} item(s)")]
    ItemIndexOutOfRange { tag: Tag, index: usize, len: usize },

    #[error("Element {0} not found")]
    ElementNotFound(Tag),

    #[error("Element {0} already exists")]
    ElementExists(Tag),

    #[error("Element {tag} holds {found:?}, expected {expected:?}")]
    WrongValueKind {
        tag: Tag,
        found: ValueKind,
        expected: ValueKind,
    },

    #[error("Element {tag} has {actual} value(s), expected {expected}")]
    ValueCountMismatch {
        tag: Tag,
        expected: usize,
        actual: usize,
    },
}
