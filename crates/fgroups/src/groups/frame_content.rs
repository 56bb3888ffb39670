use std::any::Any;

use fgitem::{Item, tags};

use super::{group_item, new_group_item};
use crate::{FunctionalGroup, GroupType, Result, SharingMode, downcast_eq};

/// Frame Content: identifies the frame within stacks and dimensions.
///
/// Always per-frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameContent {
    frame_acquisition_number: Option<u32>,
    stack_id: Option<String>,
    in_stack_position: Option<u32>,
    dimension_index_values: Vec<u32>,
}

impl FrameContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stack(mut self, stack_id: &str, in_stack_position: u32) -> Self {
        self.stack_id = Some(stack_id.to_owned());
        self.in_stack_position = Some(in_stack_position);
        self
    }

    pub fn with_dimension_index_values(mut self, values: &[u32]) -> Self {
        self.dimension_index_values = values.to_vec();
        self
    }

    pub fn with_frame_acquisition_number(mut self, number: u32) -> Self {
        self.frame_acquisition_number = Some(number);
        self
    }

    pub fn stack_id(&self) -> Option<&str> {
        self.stack_id.as_deref()
    }

    pub fn in_stack_position(&self) -> Option<u32> {
        self.in_stack_position
    }

    pub fn dimension_index_values(&self) -> &[u32] {
        &self.dimension_index_values
    }

    pub fn frame_acquisition_number(&self) -> Option<u32> {
        self.frame_acquisition_number
    }
}

impl FunctionalGroup for FrameContent {
    fn group_type(&self) -> GroupType {
        GroupType::FrameContent
    }

    fn sharing_mode(&self) -> SharingMode {
        SharingMode::OnlyPerFrame
    }

    fn clone_group(&self) -> Result<Box<dyn FunctionalGroup>> {
        Ok(Box::new(self.clone()))
    }

    fn content_eq(&self, other: &dyn FunctionalGroup) -> bool {
        downcast_eq(self, other)
    }

    // All attributes are optional, only the sequence itself is required.
    fn read(&mut self, item: &Item) -> Result<()> {
        let group = group_item(item, tags::FRAME_CONTENT_SEQUENCE)?;
        self.frame_acquisition_number = group.get_uint(tags::FRAME_ACQUISITION_NUMBER, 0).ok();
        self.stack_id = group.get_string(tags::STACK_ID, 0).ok().map(str::to_owned);
        self.in_stack_position = group.get_uint(tags::IN_STACK_POSITION_NUMBER, 0).ok();
        self.dimension_index_values = group
            .get_uints(tags::DIMENSION_INDEX_VALUES)
            .map(<[u32]>::to_vec)
            .unwrap_or_default();
        Ok(())
    }

    fn write(&self, item: &mut Item) -> Result<()> {
        let group = new_group_item(item, tags::FRAME_CONTENT_SEQUENCE)?;
        if let Some(number) = self.frame_acquisition_number {
            group.put_uints(tags::FRAME_ACQUISITION_NUMBER, &[number]);
        }
        if let Some(stack_id) = &self.stack_id {
            group.put_string(tags::STACK_ID, stack_id);
        }
        if let Some(position) = self.in_stack_position {
            group.put_uints(tags::IN_STACK_POSITION_NUMBER, &[position]);
        }
        if !self.dimension_index_values.is_empty() {
            group.put_uints(tags::DIMENSION_INDEX_VALUES, &self.dimension_index_values);
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
