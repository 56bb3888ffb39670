#![doc = include_str!("../README.md")]

pub use fgitem::{Item, Tag, Value, ValueKind, tags};

mod error;
mod group;
mod group_set;
mod groups;
mod interface;
mod registry;
mod types;

pub use error::*;
pub use group::*;
pub use group_set::*;
pub use groups::*;
pub use interface::*;
pub use registry::*;
pub use types::*;
