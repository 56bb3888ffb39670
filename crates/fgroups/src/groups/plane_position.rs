use std::any::Any;

use fgitem::{Item, tags};

use super::{group_item, new_group_item, read_floats};
use crate::{FunctionalGroup, GroupType, Result, SharingMode, downcast_eq};

/// Plane Position (Patient): position of the frame's upper left pixel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanePosition {
    image_position: [f64; 3],
}

impl PlanePosition {
    pub fn new(image_position: [f64; 3]) -> Self {
        Self { image_position }
    }

    #[inline]
    pub fn image_position(&self) -> [f64; 3] {
        self.image_position
    }

    pub fn set_image_position(&mut self, image_position: [f64; 3]) {
        self.image_position = image_position;
    }
}

impl FunctionalGroup for PlanePosition {
    fn group_type(&self) -> GroupType {
        GroupType::PlanePosition
    }

    fn sharing_mode(&self) -> SharingMode {
        SharingMode::MayBeEither
    }

    fn clone_group(&self) -> Result<Box<dyn FunctionalGroup>> {
        Ok(Box::new(self.clone()))
    }

    fn content_eq(&self, other: &dyn FunctionalGroup) -> bool {
        downcast_eq(self, other)
    }

    fn read(&mut self, item: &Item) -> Result<()> {
        let group = group_item(item, tags::PLANE_POSITION_SEQUENCE)?;
        self.image_position = read_floats(group, tags::IMAGE_POSITION_PATIENT)?;
        Ok(())
    }

    fn write(&self, item: &mut Item) -> Result<()> {
        let group = new_group_item(item, tags::PLANE_POSITION_SEQUENCE)?;
        group.put_floats(tags::IMAGE_POSITION_PATIENT, &self.image_position);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
