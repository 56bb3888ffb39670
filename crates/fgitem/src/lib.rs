#![doc = include_str!("../README.md")]

pub mod error;
mod item;
mod tag;
pub mod tags;
mod value;

pub use error::*;
pub use item::*;
pub use tag::*;
pub use value::*;
