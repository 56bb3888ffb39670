use fgitem::{Item, ValueKind, tags};
use log::{debug, error, trace};

use super::{GroupInterface, parallel};
use crate::{Error, GroupSet, Result};

impl GroupInterface {
    /// Writes the Shared and Per-Frame Functional Groups Sequences into `dataset`,
    /// replacing existing ones.
    ///
    /// Runs [`check()`](Self::check) first unless disabled. The first group that
    /// fails to write aborts the whole write.
    pub fn write(&self, dataset: &mut Item) -> Result<()> {
        if self.check_on_write() && !self.check() {
            error!("Functional groups are inconsistent, refusing to write");
            return Err(Error::CouldNotWriteGroups);
        }

        self.write_shared(dataset)?;
        self.write_per_frame(dataset)
    }

    fn write_shared(&self, dataset: &mut Item) -> Result<()> {
        debug!("Writing shared functional groups");
        let tag = tags::SHARED_FUNCTIONAL_GROUPS_SEQUENCE;
        dataset.insert_empty(tag, ValueKind::Sequence, true)?;
        let item = dataset
            .find_or_create_sequence_item(tag, 0)
            .inspect_err(|_| {
                error!("Could not create Shared Functional Groups Sequence with single item");
            })?;

        for group in self.shared.iter() {
            trace!("Writing shared group: {}", group.group_type());
            group.write(item).inspect_err(|e| {
                error!("Could not write shared group {}: {e}", group.group_type());
            })?;
        }
        Ok(())
    }

    fn write_per_frame(&self, dataset: &mut Item) -> Result<()> {
        let tag = tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE;
        dataset
            .insert_empty(tag, ValueKind::Sequence, true)
            .inspect_err(|_| error!("Could not create Per-Frame Functional Groups Sequence"))?;

        // Frames are written in ascending frame number, one item each.
        let frames: Vec<&GroupSet> = self.per_frame.values().collect();
        let threads = parallel::find_adequate_number_of_threads(frames.len(), self.use_threads() as usize);

        if threads > 1 {
            debug!("Writing {} frames with {threads} threads", frames.len());
            let items = parallel::write_per_frame_parallel(&frames, threads)?;
            for (index, item) in items.into_iter().enumerate() {
                dataset.insert_sequence_item(tag, index, item)?;
            }
        } else {
            debug!("Writing {} frames", frames.len());
            for (index, groups) in frames.iter().enumerate() {
                let item = dataset.find_or_create_sequence_item(tag, index)?;
                write_frame_groups(groups, item, index)?;
            }
        }
        Ok(())
    }
}

/// Writes all groups of one frame into its item.
pub(super) fn write_frame_groups(groups: &GroupSet, item: &mut Item, index: usize) -> Result<()> {
    for group in groups.iter() {
        trace!("Writing per-frame group: {} for frame #{index}", group.group_type());
        group.write(item).inspect_err(|e| {
            error!(
                "Could not write per-frame group {} for frame #{index}: {e}",
                group.group_type()
            );
        })?;
    }
    Ok(())
}
