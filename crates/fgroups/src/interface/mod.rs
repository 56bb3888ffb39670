use std::{collections::BTreeMap, sync::Arc};

use log::{debug, error, trace, warn};

use crate::{
    Error, FrameContentPolicy, FunctionalGroup, GroupRegistry, GroupSet, GroupType, Result,
};

mod options;
mod parallel;
mod read;
mod write;

pub use options::*;
pub use parallel::{MIN_FRAMES_PER_THREAD, find_adequate_number_of_threads};

/// Shared and per-frame functional groups of one multi-frame record.
///
/// Holds a single shared [`GroupSet`] and one [`GroupSet`] per frame, keyed by
/// the zero-based frame number. The interface never keeps the same group type
/// both shared and per-frame on its own accord, but direct insertion paths do
/// not re-verify this; [`check()`](Self::check) does, and runs before every
/// write unless disabled.
#[derive(Debug)]
pub struct GroupInterface {
    shared: GroupSet,
    per_frame: BTreeMap<u32, GroupSet>,
    registry: Arc<GroupRegistry>,
    options: GroupInterfaceOptions,
}

impl Default for GroupInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupInterface {
    /// Creates an empty interface that reads with the standard codecs.
    pub fn new() -> Self {
        Self::with_registry(Arc::new(GroupRegistry::standard()))
    }

    pub fn with_registry(registry: Arc<GroupRegistry>) -> Self {
        Self::with_options(registry, GroupInterfaceOptions::default())
    }

    pub fn with_options(registry: Arc<GroupRegistry>, options: GroupInterfaceOptions) -> Self {
        Self {
            shared: GroupSet::new(),
            per_frame: BTreeMap::new(),
            registry,
            options,
        }
    }

    /// Drops all shared and per-frame groups. Options and registry are kept.
    pub fn clear(&mut self) {
        self.per_frame.clear();
        self.shared.clear();
    }

    /// Number of frames that have a per-frame group set.
    #[inline]
    pub fn num_frames(&self) -> usize {
        self.per_frame.len()
    }

    /// Adds a copy of `group` as shared group, replacing an old shared one.
    ///
    /// Per-frame groups of the same type are deleted from every frame.
    pub fn add_shared(&mut self, group: &dyn FunctionalGroup) -> Result<()> {
        let group_type = group.group_type();
        let mode = group.sharing_mode();
        if !mode.allows_shared() {
            error!("Cannot add group as shared, group type {group_type} is always per-frame");
            return Err(Error::CouldNotAddGroup {
                group_type,
                requested: "shared",
                mode,
            });
        }

        let copy = group.clone_group()?;

        let deleted = self.delete_per_frame_all(group_type);
        if deleted > 0 {
            debug!("Deleted {deleted} per-frame group(s) of type {group_type} in favor of shared group");
        }

        self.shared.insert(copy, true)?;
        Ok(())
    }

    /// Adds a copy of `group` for frame `frame_no`, replacing an old one.
    ///
    /// If a shared group of the same type exists and holds the same values,
    /// nothing changes. If its values differ, the shared group is first copied
    /// to every existing frame and removed from the shared set.
    pub fn add_per_frame(&mut self, frame_no: u32, group: &dyn FunctionalGroup) -> Result<()> {
        let group_type = group.group_type();
        let mode = group.sharing_mode();
        if !mode.allows_per_frame() {
            error!("Cannot add group as per-frame, group type {group_type} is always shared");
            return Err(Error::CouldNotAddGroup {
                group_type,
                requested: "per-frame",
                mode,
            });
        }

        if let Some(shared) = self.shared.find(group_type)
            && shared.content_eq(group)
        {
            debug!("Re-using shared group instead of adding per-frame for frame {frame_no}, type {group_type}");
            return Ok(());
        }

        let copy = group.clone_group()?;

        if self.shared.contains(group_type) {
            debug!(
                "Converting shared group of type {group_type} to per-frame, triggered by deviating per-frame insertion"
            );
            self.convert_shared_to_per_frame(group_type)?;
        }

        self.insert_per_frame(frame_no, copy, true)
    }

    /// Moves the shared group of the given type to every existing frame.
    ///
    /// Either all frames receive a copy and the shared group is removed, or,
    /// if copying fails, nothing changes.
    pub fn convert_shared_to_per_frame(&mut self, group_type: GroupType) -> Result<()> {
        let shared = self
            .shared
            .find(group_type)
            .ok_or(Error::NoSuchGroup(group_type))?;

        let copies = self
            .per_frame
            .keys()
            .map(|&frame_no| shared.clone_group().map(|copy| (frame_no, copy)))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|e| {
                error!("Could not convert shared group {group_type} to per-frame: {e}");
            })?;

        self.shared.remove(group_type);
        for (frame_no, copy) in copies {
            self.insert_per_frame(frame_no, copy, true)?;
        }
        Ok(())
    }

    fn insert_per_frame(
        &mut self,
        frame_no: u32,
        group: Box<dyn FunctionalGroup>,
        replace_old: bool,
    ) -> Result<()> {
        trace!(
            "Inserting per-frame group {} for frame #{frame_no}",
            group.group_type()
        );
        self.per_frame
            .entry(frame_no)
            .or_default()
            .insert(group, replace_old)?;
        Ok(())
    }

    /// Returns the group of the given type that applies to frame `frame_no`,
    /// and whether it is stored per-frame (`true`) or shared (`false`).
    pub fn get(
        &self,
        frame_no: u32,
        group_type: GroupType,
    ) -> Option<(&dyn FunctionalGroup, bool)> {
        if let Some(group) = self.shared.find(group_type) {
            return Some((group, false));
        }
        self.get_per_frame(frame_no, group_type)
            .map(|group| (group, true))
    }

    #[inline]
    pub fn get_shared(&self, group_type: GroupType) -> Option<&dyn FunctionalGroup> {
        self.shared.find(group_type)
    }

    pub fn get_per_frame(&self, frame_no: u32, group_type: GroupType) -> Option<&dyn FunctionalGroup> {
        self.per_frame
            .get(&frame_no)
            .and_then(|groups| groups.find(group_type))
    }

    #[inline]
    pub fn shared(&self) -> &GroupSet {
        &self.shared
    }

    #[inline]
    pub fn per_frame(&self, frame_no: u32) -> Option<&GroupSet> {
        self.per_frame.get(&frame_no)
    }

    /// Iterates frames in ascending frame number.
    pub fn frames(&self) -> impl Iterator<Item = (u32, &GroupSet)> {
        self.per_frame.iter().map(|(&frame_no, groups)| (frame_no, groups))
    }

    /// Deletes the shared group of the given type. Returns whether one existed.
    pub fn delete_shared(&mut self, group_type: GroupType) -> bool {
        self.shared.remove(group_type).is_some()
    }

    /// Deletes the group of the given type from frame `frame_no`. Returns whether one existed.
    pub fn delete_per_frame(&mut self, frame_no: u32, group_type: GroupType) -> bool {
        let removed = self
            .per_frame
            .get_mut(&frame_no)
            .and_then(|groups| groups.remove(group_type))
            .is_some();
        if removed {
            debug!("Deleting functional group for frame {frame_no}, type: {group_type}");
        }
        removed
    }

    /// Deletes the group of the given type from every frame. Returns how many were deleted.
    pub fn delete_per_frame_all(&mut self, group_type: GroupType) -> usize {
        self.per_frame
            .values_mut()
            .filter_map(|groups| groups.remove(group_type))
            .count()
    }

    /// Drops the whole group set of frame `frame_no`. Returns whether the frame existed.
    pub fn delete_frame(&mut self, frame_no: u32) -> bool {
        self.per_frame.remove(&frame_no).is_some()
    }

    /// Verifies the shared/per-frame rules.
    ///
    /// Reports every violation through the log and returns `false` if any was found:
    /// - a type present both shared and per-frame
    /// - an only-shared group in a frame
    /// - an only-per-frame group in the shared set
    ///
    /// A frame with Frame Content neither per-frame nor shared is handled per
    /// [`FrameContentPolicy`].
    pub fn check(&self) -> bool {
        debug!(
            "Checking functional group structure for {} frames",
            self.num_frames()
        );
        let mut num_errors = 0usize;

        for (&frame_no, groups) in &self.per_frame {
            trace!("Checking frame {frame_no}...");
            for group in groups.iter() {
                let group_type = group.group_type();
                if group_type.is_known() && self.shared.contains(group_type) {
                    error!("Functional group of type {group_type} is shared AND per-frame for frame {frame_no}");
                    num_errors += 1;
                }
                if !group.sharing_mode().allows_per_frame() {
                    error!("Functional group of type {group_type} can never be per-frame, but found for frame {frame_no}");
                    num_errors += 1;
                }
            }

            if !groups.contains(GroupType::FrameContent)
                && !self.shared.contains(GroupType::FrameContent)
            {
                match self.options.frame_content_policy {
                    FrameContentPolicy::Ignore => {}
                    FrameContentPolicy::Warn => {
                        warn!("Frame Content functional group missing for frame #{frame_no}");
                    }
                    FrameContentPolicy::Error => {
                        error!("Frame Content functional group missing for frame #{frame_no}");
                        num_errors += 1;
                    }
                }
            }
        }

        for group in self.shared.iter() {
            if !group.sharing_mode().allows_shared() {
                error!(
                    "Functional group of type {} used as shared functional group but must be per-frame",
                    group.group_type()
                );
                num_errors += 1;
            }
        }

        num_errors == 0
    }

    // Configuration

    #[inline]
    pub fn options(&self) -> &GroupInterfaceOptions {
        &self.options
    }

    #[inline]
    pub fn registry(&self) -> &GroupRegistry {
        &self.registry
    }

    pub fn set_check_on_write(&mut self, check_on_write: bool) {
        self.options.check_on_write = check_on_write;
    }

    #[inline]
    pub fn check_on_write(&self) -> bool {
        self.options.check_on_write
    }

    /// Sets the upper bound on worker threads used by the next read or write. 0 is treated as 1.
    pub fn set_use_threads(&mut self, use_threads: u32) {
        self.options.use_threads = use_threads.max(1);
    }

    #[inline]
    pub fn use_threads(&self) -> u32 {
        self.options.use_threads.max(1)
    }

    pub fn set_frame_content_policy(&mut self, policy: FrameContentPolicy) {
        self.options.frame_content_policy = policy;
    }

    #[inline]
    pub fn frame_content_policy(&self) -> FrameContentPolicy {
        self.options.frame_content_policy
    }
}
