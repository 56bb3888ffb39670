use std::{collections::HashMap, fmt};

use fgitem::{Tag, tags};

use crate::{
    Error, FrameContent, FunctionalGroup, PixelMeasures, PlaneOrientation, PlanePosition, Result,
};

type Constructor = Box<dyn Fn() -> Box<dyn FunctionalGroup> + Send + Sync>;

/// Maps a functional group sequence tag to a constructor for its codec.
///
/// Passed explicitly to the interface; there is no process-wide instance.
#[derive(Default)]
pub struct GroupRegistry {
    constructors: HashMap<Tag, Constructor>,
}

impl GroupRegistry {
    /// Creates a registry without any codec.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry with the codecs shipped in this crate.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register_standard();
        registry
    }

    fn register_standard(&mut self) {
        self.register(tags::FRAME_CONTENT_SEQUENCE, || Box::new(FrameContent::default()));
        self.register(tags::PIXEL_MEASURES_SEQUENCE, || Box::new(PixelMeasures::default()));
        self.register(tags::PLANE_ORIENTATION_SEQUENCE, || {
            Box::new(PlaneOrientation::default())
        });
        self.register(tags::PLANE_POSITION_SEQUENCE, || Box::new(PlanePosition::default()));
    }

    /// Registers a constructor for the given sequence tag, replacing any previous one.
    pub fn register<F>(&mut self, tag: Tag, constructor: F)
    where
        F: Fn() -> Box<dyn FunctionalGroup> + Send + Sync + 'static,
    {
        self.constructors.insert(tag, Box::new(constructor));
    }

    /// Registers `G::default()` under the sequence tag of its group type.
    pub fn register_default<G>(&mut self) -> Result<()>
    where
        G: FunctionalGroup + Default + 'static,
    {
        let group_type = G::default().group_type();
        let tag = group_type.sequence_tag().ok_or_else(|| {
            Error::InvalidArgument(format!("group type {group_type} has no sequence tag"))
        })?;
        self.register(tag, || Box::new(G::default()));
        Ok(())
    }

    /// Creates an empty codec for the given sequence tag.
    #[inline]
    pub fn resolve(&self, tag: Tag) -> Option<Box<dyn FunctionalGroup>> {
        self.constructors.get(&tag).map(|constructor| constructor())
    }

    #[inline]
    pub fn contains(&self, tag: Tag) -> bool {
        self.constructors.contains_key(&tag)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl fmt::Debug for GroupRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.constructors.keys().collect();
        tags.sort();
        f.debug_struct("GroupRegistry").field("tags", &tags).finish()
    }
}
