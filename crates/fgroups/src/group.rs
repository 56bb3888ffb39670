use std::{any::Any, fmt::Debug};

use fgitem::Item;

use crate::{GroupType, Result, SharingMode};

/// A functional group codec: one kind of attribute bundle, with the values it owns.
///
/// Implementations read themselves from, and write themselves to, a functional
/// group item (one item of the shared or per-frame sequence). They must be
/// `Send + Sync` so frames can be parsed and serialized on worker threads.
pub trait FunctionalGroup: Debug + Send + Sync {
    fn group_type(&self) -> GroupType;

    fn sharing_mode(&self) -> SharingMode;

    /// Deep copy of this group.
    ///
    /// Implementations that allocate through fallible paths report
    /// `Error::OutOfMemory` instead of aborting.
    fn clone_group(&self) -> Result<Box<dyn FunctionalGroup>>;

    /// Whether `other` is of the same concrete kind and holds the same values.
    fn content_eq(&self, other: &dyn FunctionalGroup) -> bool;

    /// Reads the group from its sequence inside `item`.
    fn read(&mut self, item: &Item) -> Result<()>;

    /// Writes the group as a sequence into `item`, replacing an old one.
    fn write(&self, item: &mut Item) -> Result<()>;

    fn as_any(&self) -> &dyn Any;
}

/// `content_eq` for groups whose values implement `PartialEq`.
#[inline]
pub fn downcast_eq<G>(group: &G, other: &dyn FunctionalGroup) -> bool
where
    G: FunctionalGroup + PartialEq + 'static,
{
    other
        .as_any()
        .downcast_ref::<G>()
        .is_some_and(|other| other == group)
}
