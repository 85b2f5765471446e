//! propmed core types
//!
//! This crate provides the foundational types shared by the shape registry
//! and the mediator:
//! - Value types (the Value enum and attribute maps)
//! - Slot storage for one host instance
//! - Property error types

mod error;
mod slots;
mod value;

pub use error::*;
pub use slots::*;
pub use value::*;
