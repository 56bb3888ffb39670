use std::result;

use fgitem::Tag;
use thiserror::Error;

use crate::GroupType;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for functional group operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Item(#[from] fgitem::Error),

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    // Reading
    #[error("Required sequence {0} is missing or has no items")]
    MissingRequiredSequence(Tag),

    #[error("Sequence {tag} has {count} items, at most {max} allowed")]
    CardinalityViolation { tag: Tag, count: usize, max: usize },

    // Group management
    #[error("Functional group {0} already exists")]
    DuplicateGroup(GroupType),

    #[error("Out of memory while copying functional group {0}")]
    OutOfMemory(GroupType),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No such functional group: {0}")]
    NoSuchGroup(GroupType),

    #[error("Could not store functional groups for frame #{frame}")]
    InternalInsertFailure { frame: usize },

    #[error("Cannot add {group_type} as {requested}: group is {mode}")]
    CouldNotAddGroup {
        group_type: GroupType,
        requested: &'static str,
        mode: crate::SharingMode,
    },

    // Writing
    #[error("Could not write functional groups: consistency check failed")]
    CouldNotWriteGroups,

    #[error("Parallel processing failed: {0}")]
    ParallelProcessingFailure(String),
}
