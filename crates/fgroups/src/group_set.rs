use std::collections::{BTreeMap, btree_map};

use log::debug;

use crate::{Error, FunctionalGroup, GroupType};

/// Groups keyed by their type, at most one per type.
///
/// Iteration follows `GroupType` order, so writing a set is deterministic.
#[derive(Debug, Default)]
pub struct GroupSet {
    groups: BTreeMap<GroupType, Box<dyn FunctionalGroup>>,
}

/// Returned by `GroupSet::insert` when the type is taken; hands the rejected group back.
#[derive(Debug, thiserror::Error)]
#[error("Functional group {} already exists", .group.group_type())]
pub struct DuplicateGroup {
    pub group: Box<dyn FunctionalGroup>,
}

impl From<DuplicateGroup> for Error {
    fn from(value: DuplicateGroup) -> Self {
        Self::DuplicateGroup(value.group.group_type())
    }
}

impl GroupSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `group` under its type.
    ///
    /// With `replace_old` an existing group of that type is dropped, otherwise
    /// the insert is refused and `group` is returned inside the error.
    pub fn insert(
        &mut self,
        group: Box<dyn FunctionalGroup>,
        replace_old: bool,
    ) -> Result<(), DuplicateGroup> {
        match self.groups.entry(group.group_type()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(group);
            }
            btree_map::Entry::Occupied(mut entry) => {
                if !replace_old {
                    return Err(DuplicateGroup { group });
                }
                debug!("Replacing functional group {}", entry.key());
                entry.insert(group);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn find(&self, group_type: GroupType) -> Option<&dyn FunctionalGroup> {
        self.groups.get(&group_type).map(Box::as_ref)
    }

    #[inline]
    pub fn find_mut(&mut self, group_type: GroupType) -> Option<&mut (dyn FunctionalGroup + 'static)> {
        self.groups.get_mut(&group_type).map(Box::as_mut)
    }

    #[inline]
    pub fn contains(&self, group_type: GroupType) -> bool {
        self.groups.contains_key(&group_type)
    }

    /// Takes the group of the given type out of the set.
    #[inline]
    pub fn remove(&mut self, group_type: GroupType) -> Option<Box<dyn FunctionalGroup>> {
        self.groups.remove(&group_type)
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn types(&self) -> impl Iterator<Item = GroupType> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn FunctionalGroup> {
        self.groups.values().map(Box::as_ref)
    }

    /// Whether both sets hold the same types with equal content.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.groups.iter().all(|(group_type, group)| {
                other
                    .find(*group_type)
                    .is_some_and(|other| group.content_eq(other))
            })
    }
}
