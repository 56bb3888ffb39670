use std::any::Any;

use fgitem::{Item, tags};

use super::{group_item, new_group_item, read_floats};
use crate::{Error, FunctionalGroup, GroupType, Result, SharingMode, downcast_eq};

/// Pixel Measures: pixel spacing and, optionally, slice thickness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelMeasures {
    pixel_spacing: Option<[f64; 2]>,
    slice_thickness: Option<f64>,
}

impl PixelMeasures {
    pub fn new(pixel_spacing: [f64; 2], slice_thickness: Option<f64>) -> Self {
        Self {
            pixel_spacing: Some(pixel_spacing),
            slice_thickness,
        }
    }

    #[inline]
    pub fn pixel_spacing(&self) -> Option<[f64; 2]> {
        self.pixel_spacing
    }

    #[inline]
    pub fn slice_thickness(&self) -> Option<f64> {
        self.slice_thickness
    }
}

impl FunctionalGroup for PixelMeasures {
    fn group_type(&self) -> GroupType {
        GroupType::PixelMeasures
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
        let group = group_item(item, tags::PIXEL_MEASURES_SEQUENCE)?;
        self.slice_thickness = group.get_float(tags::SLICE_THICKNESS, 0).ok();
        self.pixel_spacing = Some(read_floats(group, tags::PIXEL_SPACING)?);
        Ok(())
    }

    fn write(&self, item: &mut Item) -> Result<()> {
        let Some(pixel_spacing) = self.pixel_spacing else {
            return Err(Error::InvalidArgument(format!(
                "{} requires pixel spacing",
                self.group_type()
            )));
        };
        let group = new_group_item(item, tags::PIXEL_MEASURES_SEQUENCE)?;
        group.put_floats(tags::PIXEL_SPACING, &pixel_spacing);
        if let Some(thickness) = self.slice_thickness {
            group.put_floats(tags::SLICE_THICKNESS, &[thickness]);
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
