//! propmed Registry
//!
//! Static host shapes: declared fields, the alias table and the custom
//! accessor registry. A Shape is immutable after construction via
//! ShapeBuilder and is typically shared by every instance of a host type.

mod builder;
mod shape;
mod types;

pub use builder::{ShapeBuilder, ShapeError};
pub use shape::Shape;
pub use types::*;
