#![allow(dead_code)]

use std::{
    any::Any,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use fgroups::{
    Error, FrameContent, FunctionalGroup, GroupInterface, GroupRegistry, GroupType, Item,
    PixelMeasures, PlaneOrientation, PlanePosition, Result, SharingMode, Tag, ValueKind,
};

const VALUE: Tag = Tag::new(0x0009, 0x1001);

/// Codec with a configurable type and sharing mode holding a single string.
#[derive(Debug, Clone)]
pub struct TestGroup {
    group_type: GroupType,
    mode: SharingMode,
    value: String,
    clone_budget: Option<Arc<AtomicUsize>>,
    fail_write: bool,
}

impl TestGroup {
    pub fn new(group_type: GroupType, mode: SharingMode, value: &str) -> Self {
        Self {
            group_type,
            mode,
            value: value.to_owned(),
            clone_budget: None,
            fail_write: false,
        }
    }

    /// Every clone (including the clones of clones) draws from `budget`;
    /// cloning fails once it is exhausted.
    pub fn with_clone_budget(mut self, budget: Arc<AtomicUsize>) -> Self {
        self.clone_budget = Some(budget);
        self
    }

    pub fn failing_write(mut self) -> Self {
        self.fail_write = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl PartialEq for TestGroup {
    fn eq(&self, other: &Self) -> bool {
        self.group_type == other.group_type && self.mode == other.mode && self.value == other.value
    }
}

impl FunctionalGroup for TestGroup {
    fn group_type(&self) -> GroupType {
        self.group_type
    }

    fn sharing_mode(&self) -> SharingMode {
        self.mode
    }

    fn clone_group(&self) -> Result<Box<dyn FunctionalGroup>> {
        if let Some(budget) = &self.clone_budget
            && budget
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_err()
        {
            return Err(Error::OutOfMemory(self.group_type));
        }
        Ok(Box::new(self.clone()))
    }

    fn content_eq(&self, other: &dyn FunctionalGroup) -> bool {
        fgroups::downcast_eq(self, other)
    }

    fn read(&mut self, item: &Item) -> Result<()> {
        let tag = sequence_tag(self.group_type);
        self.value = item.sequence_item(tag, 0)?.get_string(VALUE, 0)?.to_owned();
        Ok(())
    }

    fn write(&self, item: &mut Item) -> Result<()> {
        if self.fail_write {
            return Err(Error::InvalidArgument(format!(
                "{} refuses to be written",
                self.group_type
            )));
        }
        let tag = sequence_tag(self.group_type);
        item.insert_empty(tag, ValueKind::Sequence, true)?;
        item.find_or_create_sequence_item(tag, 0)?
            .put_string(VALUE, &self.value);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn sequence_tag(group_type: GroupType) -> Tag {
    group_type.sequence_tag().unwrap()
}

/// Value of a `TestGroup`, panics for other codecs.
pub fn value_of(group: &dyn FunctionalGroup) -> &str {
    group
        .as_any()
        .downcast_ref::<TestGroup>()
        .expect("not a TestGroup")
        .value()
}

/// Standard registry plus a `TestGroup` codec for each `(type, mode)`.
pub fn registry_with(test_groups: &[(GroupType, SharingMode)]) -> Arc<GroupRegistry> {
    let mut registry = GroupRegistry::standard();
    for &(group_type, mode) in test_groups {
        registry.register(sequence_tag(group_type), move || {
            Box::new(TestGroup::new(group_type, mode, ""))
        });
    }
    Arc::new(registry)
}

/// Interface with `num_frames` frames, each holding Frame Content and a plane
/// position, plus shared pixel measures and plane orientation.
pub fn populated(num_frames: u32) -> Result<GroupInterface> {
    let mut fg = GroupInterface::new();
    fg.add_shared(&PixelMeasures::new([0.5, 0.5], Some(1.25)))?;
    fg.add_shared(&PlaneOrientation::axial())?;
    for frame_no in 0..num_frames {
        let content = FrameContent::new()
            .with_stack("1", frame_no + 1)
            .with_dimension_index_values(&[1, frame_no + 1]);
        fg.add_per_frame(frame_no, &content)?;
        fg.add_per_frame(
            frame_no,
            &PlanePosition::new([0.0, 0.0, f64::from(frame_no) * 1.5]),
        )?;
    }
    Ok(fg)
}

/// Asserts both interfaces hold equal groups, shared and per frame.
pub fn assert_same_state(a: &GroupInterface, b: &GroupInterface) {
    assert!(a.shared().content_eq(b.shared()), "shared groups differ");
    assert_eq!(a.num_frames(), b.num_frames());
    for ((frame_a, groups_a), (frame_b, groups_b)) in a.frames().zip(b.frames()) {
        assert_eq!(frame_a, frame_b);
        assert!(
            groups_a.content_eq(groups_b),
            "groups of frame {frame_a} differ"
        );
    }
}
