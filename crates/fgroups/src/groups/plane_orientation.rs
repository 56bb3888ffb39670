use std::any::Any;

use fgitem::{Item, tags};

use super::{group_item, new_group_item, read_floats};
use crate::{FunctionalGroup, GroupType, Result, SharingMode, downcast_eq};

/// Plane Orientation (Patient): row and column direction cosines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaneOrientation {
    image_orientation: [f64; 6],
}

impl PlaneOrientation {
    pub fn new(row: [f64; 3], column: [f64; 3]) -> Self {
        let [r0, r1, r2] = row;
        let [c0, c1, c2] = column;
        Self {
            image_orientation: [r0, r1, r2, c0, c1, c2],
        }
    }

    /// Axial orientation, rows along +x and columns along +y.
    pub fn axial() -> Self {
        Self::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0])
    }

    #[inline]
    pub fn image_orientation(&self) -> [f64; 6] {
        self.image_orientation
    }
}

impl FunctionalGroup for PlaneOrientation {
    fn group_type(&self) -> GroupType {
        GroupType::PlaneOrientation
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
        let group = group_item(item, tags::PLANE_ORIENTATION_SEQUENCE)?;
        self.image_orientation = read_floats(group, tags::IMAGE_ORIENTATION_PATIENT)?;
        Ok(())
    }

    fn write(&self, item: &mut Item) -> Result<()> {
        let group = new_group_item(item, tags::PLANE_ORIENTATION_SEQUENCE)?;
        group.put_floats(tags::IMAGE_ORIENTATION_PATIENT, &self.image_orientation);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
