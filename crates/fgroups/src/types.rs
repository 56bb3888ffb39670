use std::fmt;

use fgitem::{Tag, tags};

/// Maximum number of frames a multi-frame record can hold.
pub const MAX_FRAMES: u32 = u32::MAX;

/// Kind of functional group.
///
/// Each known kind is stored in its own sequence inside a functional group item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupType {
    Undefined,
    Unknown,
    CtAcquisitionDetails,
    CtAcquisitionType,
    CtAdditionalXRaySource,
    CtExposure,
    CtGeometry,
    CtImageFrameType,
    CtPosition,
    CtReconstruction,
    CtTableDynamics,
    CtXRayDetails,
    DerivationImage,
    FrameAnatomy,
    FrameContent,
    FrameVoiLut,
    IrradiationEventIdentification,
    PixelMeasures,
    PixelValueTransformation,
    PlaneOrientation,
    PlanePosition,
    Segmentation,
    TemporalPosition,
}

impl GroupType {
    pub const ALL_KNOWN: [Self; 21] = [
        Self::CtAcquisitionDetails,
        Self::CtAcquisitionType,
        Self::CtAdditionalXRaySource,
        Self::CtExposure,
        Self::CtGeometry,
        Self::CtImageFrameType,
        Self::CtPosition,
        Self::CtReconstruction,
        Self::CtTableDynamics,
        Self::CtXRayDetails,
        Self::DerivationImage,
        Self::FrameAnatomy,
        Self::FrameContent,
        Self::FrameVoiLut,
        Self::IrradiationEventIdentification,
        Self::PixelMeasures,
        Self::PixelValueTransformation,
        Self::PlaneOrientation,
        Self::PlanePosition,
        Self::Segmentation,
        Self::TemporalPosition,
    ];

    /// Sequence tag holding this group inside a functional group item.
    pub fn sequence_tag(&self) -> Option<Tag> {
        let tag = match self {
            Self::Undefined | Self::Unknown => return None,
            Self::CtAcquisitionDetails => tags::CT_ACQUISITION_DETAILS_SEQUENCE,
            Self::CtAcquisitionType => tags::CT_ACQUISITION_TYPE_SEQUENCE,
            Self::CtAdditionalXRaySource => tags::CT_ADDITIONAL_X_RAY_SOURCE_SEQUENCE,
            Self::CtExposure => tags::CT_EXPOSURE_SEQUENCE,
            Self::CtGeometry => tags::CT_GEOMETRY_SEQUENCE,
            Self::CtImageFrameType => tags::CT_IMAGE_FRAME_TYPE_SEQUENCE,
            Self::CtPosition => tags::CT_POSITION_SEQUENCE,
            Self::CtReconstruction => tags::CT_RECONSTRUCTION_SEQUENCE,
            Self::CtTableDynamics => tags::CT_TABLE_DYNAMICS_SEQUENCE,
            Self::CtXRayDetails => tags::CT_X_RAY_DETAILS_SEQUENCE,
            Self::DerivationImage => tags::DERIVATION_IMAGE_SEQUENCE,
            Self::FrameAnatomy => tags::FRAME_ANATOMY_SEQUENCE,
            Self::FrameContent => tags::FRAME_CONTENT_SEQUENCE,
            Self::FrameVoiLut => tags::FRAME_VOI_LUT_SEQUENCE,
            Self::IrradiationEventIdentification => tags::IRRADIATION_EVENT_IDENTIFICATION_SEQUENCE,
            Self::PixelMeasures => tags::PIXEL_MEASURES_SEQUENCE,
            Self::PixelValueTransformation => tags::PIXEL_VALUE_TRANSFORMATION_SEQUENCE,
            Self::PlaneOrientation => tags::PLANE_ORIENTATION_SEQUENCE,
            Self::PlanePosition => tags::PLANE_POSITION_SEQUENCE,
            Self::Segmentation => tags::SEGMENT_IDENTIFICATION_SEQUENCE,
            Self::TemporalPosition => tags::TEMPORAL_POSITION_SEQUENCE,
        };
        Some(tag)
    }

    /// Group type stored in the sequence with the given tag.
    pub fn from_sequence_tag(tag: Tag) -> Self {
        Self::ALL_KNOWN
            .into_iter()
            .find(|group_type| group_type.sequence_tag() == Some(tag))
            .unwrap_or(Self::Unknown)
    }

    /// Whether this is a real group kind rather than a placeholder.
    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Undefined | Self::Unknown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Unknown => "Unknown",
            Self::CtAcquisitionDetails => "CT Acquisition Details",
            Self::CtAcquisitionType => "CT Acquisition Type",
            Self::CtAdditionalXRaySource => "CT Additional X-Ray Source",
            Self::CtExposure => "CT Exposure",
            Self::CtGeometry => "CT Geometry",
            Self::CtImageFrameType => "CT Image Frame Type",
            Self::CtPosition => "CT Position",
            Self::CtReconstruction => "CT Reconstruction",
            Self::CtTableDynamics => "CT Table Dynamics",
            Self::CtXRayDetails => "CT X-Ray Details",
            Self::DerivationImage => "Derivation Image",
            Self::FrameAnatomy => "Frame Anatomy",
            Self::FrameContent => "Frame Content",
            Self::FrameVoiLut => "Frame VOI LUT",
            Self::IrradiationEventIdentification => "Irradiation Event Identification",
            Self::PixelMeasures => "Pixel Measures",
            Self::PixelValueTransformation => "Pixel Value Transformation",
            Self::PlaneOrientation => "Plane Orientation (Patient)",
            Self::PlanePosition => "Plane Position (Patient)",
            Self::Segmentation => "Segmentation",
            Self::TemporalPosition => "Temporal Position",
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a group type may be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharingMode {
    OnlyShared,
    OnlyPerFrame,
    MayBeEither,
}

impl SharingMode {
    #[inline]
    pub fn allows_shared(&self) -> bool {
        *self != Self::OnlyPerFrame
    }

    #[inline]
    pub fn allows_per_frame(&self) -> bool {
        *self != Self::OnlyShared
    }
}

impl fmt::Display for SharingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OnlyShared => "only shared",
            Self::OnlyPerFrame => "only per-frame",
            Self::MayBeEither => "shared or per-frame",
        })
    }
}

/// How `check()` treats a frame without a Frame Content group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FrameContentPolicy {
    /// Not reported.
    Ignore,
    /// Logged as a warning; the check still passes.
    #[default]
    Warn,
    /// Logged as an error and counted as a violation.
    Error,
}
