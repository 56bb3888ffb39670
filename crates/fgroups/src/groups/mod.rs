//! Codecs shipped with the crate.
//!
//! Each codec stores its attributes in the single item of its own sequence
//! inside a functional group item.

mod frame_content;
mod pixel_measures;
mod plane_orientation;
mod plane_position;

pub use frame_content::*;
pub use pixel_measures::*;
pub use plane_orientation::*;
pub use plane_position::*;

use fgitem::{Item, Tag, ValueKind};

use crate::Result;

/// Returns the single item of the group sequence `tag`.
fn group_item(item: &Item, tag: Tag) -> Result<&Item> {
    Ok(item.sequence_item(tag, 0)?)
}

/// Replaces the group sequence `tag` with one empty item and returns it.
fn new_group_item(item: &mut Item, tag: Tag) -> Result<&mut Item> {
    item.insert_empty(tag, ValueKind::Sequence, true)?;
    Ok(item.find_or_create_sequence_item(tag, 0)?)
}

/// Reads exactly `N` floats.
fn read_floats<const N: usize>(item: &Item, tag: Tag) -> Result<[f64; N]> {
    let values = item.get_floats(tag)?;
    values.try_into().map_err(|_| {
        fgitem::Error::ValueCountMismatch {
            tag,
            expected: N,
            actual: values.len(),
        }
        .into()
    })
}
