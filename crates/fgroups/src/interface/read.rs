use std::collections::BTreeMap;

use fgitem::{Item, Tag, tags};
use log::{debug, error, trace, warn};

use super::{GroupInterface, parallel};
use crate::{Error, GroupRegistry, GroupSet, MAX_FRAMES, Result};

impl GroupInterface {
    /// Replaces all groups with those found in `dataset`.
    ///
    /// Both the Shared and the Per-Frame Functional Groups Sequence must be
    /// present with at least one item. Groups that cannot be understood or
    /// parsed are logged and skipped; they never fail the read.
    pub fn read(&mut self, dataset: &Item) -> Result<()> {
        self.clear();
        self.read_shared(dataset)?;
        self.read_per_frame(dataset)
    }

    fn read_shared(&mut self, dataset: &Item) -> Result<()> {
        let tag = tags::SHARED_FUNCTIONAL_GROUPS_SEQUENCE;
        let items = find_required_sequence(dataset, tag)?;

        let Some(first) = items.first() else {
            warn!("No item in Shared Functional Groups Sequence but exactly one expected");
            return Err(Error::MissingRequiredSequence(tag));
        };
        if items.len() > 1 {
            warn!("More than one item in Shared Functional Groups Sequence, only considering the first one");
        }

        read_single_group(first, &mut self.shared, &self.registry);
        Ok(())
    }

    fn read_per_frame(&mut self, dataset: &Item) -> Result<()> {
        let tag = tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE;
        let items = find_required_sequence(dataset, tag)?;
        let num_frames = frame_count(tag, items.len())?;

        let threads = parallel::find_adequate_number_of_threads(items.len(), self.use_threads() as usize);
        self.per_frame = if threads > 1 {
            debug!("Reading {num_frames} frames with {threads} threads");
            parallel::read_per_frame_parallel(items, &self.registry, threads)?
        } else {
            debug!("Reading {num_frames} frames");
            read_per_frame_sequential(items, &self.registry)
        };
        Ok(())
    }

    /// Reads every group found in `item` into `groups`, replacing groups of the same type.
    ///
    /// Never fails: non-sequence elements, unknown sequences and groups that do
    /// not parse are logged. A group that fails to parse is still inserted with
    /// whatever it managed to read.
    pub fn read_single_group(&self, item: &Item, groups: &mut GroupSet) {
        read_single_group(item, groups, &self.registry);
    }
}

fn find_required_sequence(dataset: &Item, tag: Tag) -> Result<&[Item]> {
    dataset.find_sequence(tag).map_err(|e| match e {
        fgitem::Error::SequenceNotFound(_) => {
            error!("Could not find sequence {tag}");
            Error::MissingRequiredSequence(tag)
        }
        e => e.into(),
    })
}

/// Number of frames for a per-frame sequence with `num_items` items.
pub(super) fn frame_count(tag: Tag, num_items: usize) -> Result<u32> {
    if num_items == 0 {
        warn!("No item in sequence {tag} but one or more expected");
        return Err(Error::MissingRequiredSequence(tag));
    }
    if num_items > MAX_FRAMES as usize {
        error!("Sequence {tag} has {num_items} items, at most {MAX_FRAMES} frames supported");
        return Err(Error::CardinalityViolation {
            tag,
            count: num_items,
            max: MAX_FRAMES as usize,
        });
    }
    Ok(num_items as u32)
}

pub(super) fn read_single_group(item: &Item, groups: &mut GroupSet, registry: &GroupRegistry) {
    for (tag, value) in item.elements() {
        if !value.is_sequence() {
            warn!("Found non-sequence element in functional group sequence item (ignored): {tag}");
            continue;
        }

        let Some(mut group) = registry.resolve(tag) else {
            warn!("Cannot understand functional group for sequence tag: {tag}");
            continue;
        };

        let group_type = group.group_type();
        if let Err(e) = group.read(item) {
            warn!("Cannot read functional group: {group_type} {tag} (ignored): {e}");
        }

        match groups.insert(group, true) {
            Ok(()) => trace!("Inserted functional group: {group_type} {tag}"),
            Err(e) => error!("Could not insert functional group: {group_type} {tag} (internal error): {e}"),
        }
    }
}

fn read_per_frame_sequential(items: &[Item], registry: &GroupRegistry) -> BTreeMap<u32, GroupSet> {
    let mut per_frame = BTreeMap::new();
    for (index, item) in items.iter().enumerate() {
        let mut groups = GroupSet::new();
        read_single_group(item, &mut groups, registry);
        if per_frame.insert(index as u32, groups).is_some() {
            error!("Could not store functional groups for frame #{index} (internal error)");
        }
    }
    per_frame
}
