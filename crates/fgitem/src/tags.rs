//! Well-known tags used by functional groups.

use crate::Tag;

// Multi-frame containers
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag::new(0x5200, 0x9229);
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag::new(0x5200, 0x9230);
pub const NUMBER_OF_FRAMES: Tag = Tag::new(0x0028, 0x0008);
pub const SPECIFIC_CHARACTER_SET: Tag = Tag::new(0x0008, 0x0005);

// Functional group sequences
pub const DERIVATION_IMAGE_SEQUENCE: Tag = Tag::new(0x0008, 0x9124);
pub const CT_ACQUISITION_TYPE_SEQUENCE: Tag = Tag::new(0x0018, 0x9301);
pub const CT_ACQUISITION_DETAILS_SEQUENCE: Tag = Tag::new(0x0018, 0x9304);
pub const CT_TABLE_DYNAMICS_SEQUENCE: Tag = Tag::new(0x0018, 0x9308);
pub const CT_GEOMETRY_SEQUENCE: Tag = Tag::new(0x0018, 0x9312);
pub const CT_RECONSTRUCTION_SEQUENCE: Tag = Tag::new(0x0018, 0x9314);
pub const CT_EXPOSURE_SEQUENCE: Tag = Tag::new(0x0018, 0x9321);
pub const CT_X_RAY_DETAILS_SEQUENCE: Tag = Tag::new(0x0018, 0x9325);
pub const CT_POSITION_SEQUENCE: Tag = Tag::new(0x0018, 0x9326);
pub const CT_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag::new(0x0018, 0x9329);
pub const CT_ADDITIONAL_X_RAY_SOURCE_SEQUENCE: Tag = Tag::new(0x0018, 0x9360);
pub const IRRADIATION_EVENT_IDENTIFICATION_SEQUENCE: Tag = Tag::new(0x0018, 0x9477);
pub const FRAME_ANATOMY_SEQUENCE: Tag = Tag::new(0x0020, 0x9071);
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag::new(0x0020, 0x9111);
pub const PLANE_POSITION_SEQUENCE: Tag = Tag::new(0x0020, 0x9113);
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag::new(0x0020, 0x9116);
pub const TEMPORAL_POSITION_SEQUENCE: Tag = Tag::new(0x0020, 0x9310);
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag::new(0x0028, 0x9110);
pub const FRAME_VOI_LUT_SEQUENCE: Tag = Tag::new(0x0028, 0x9132);
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag::new(0x0028, 0x9145);
pub const SEGMENT_IDENTIFICATION_SEQUENCE: Tag = Tag::new(0x0062, 0x000A);

// Attributes inside functional group items
pub const SLICE_THICKNESS: Tag = Tag::new(0x0018, 0x0050);
pub const IMAGE_POSITION_PATIENT: Tag = Tag::new(0x0020, 0x0032);
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag::new(0x0020, 0x0037);
pub const STACK_ID: Tag = Tag::new(0x0020, 0x9056);
pub const IN_STACK_POSITION_NUMBER: Tag = Tag::new(0x0020, 0x9057);
pub const FRAME_ACQUISITION_NUMBER: Tag = Tag::new(0x0020, 0x9156);
pub const DIMENSION_INDEX_VALUES: Tag = Tag::new(0x0020, 0x9157);
pub const PIXEL_SPACING: Tag = Tag::new(0x0028, 0x0030);
