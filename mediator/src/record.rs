//! A ready-made host backed by a shared shape.

use crate::{Host, MediatorConfig};
use log::warn;
use propmed_core::{PropertyError, Slots};
use propmed_registry::Shape;
use std::sync::Arc;

/// A generic host: slots for one instance of a shape, plus a log of every
/// error reported by the mediator.
#[derive(Debug)]
pub struct Record {
    shape: Arc<Shape>,
    slots: Slots,
    errors: Vec<PropertyError>,
    config: MediatorConfig,
}

impl Record {
    /// Create a record with fresh slots for `shape`.
    pub fn new(shape: impl Into<Arc<Shape>>) -> Self {
        let shape = shape.into();
        let slots = shape.instantiate();
        Self {
            shape,
            slots,
            errors: Vec::new(),
            config: MediatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MediatorConfig) -> Self {
        self.config = config;
        self
    }

    /// The shared shape, for creating sibling records.
    pub fn shape_handle(&self) -> &Arc<Shape> {
        &self.shape
    }

    /// Errors reported so far, oldest first.
    pub fn errors(&self) -> &[PropertyError] {
        &self.errors
    }

    /// Drain the reported errors.
    pub fn take_errors(&mut self) -> Vec<PropertyError> {
        std::mem::take(&mut self.errors)
    }
}

impl Host for Record {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn slots(&self) -> &Slots {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut Slots {
        &mut self.slots
    }

    fn error(&mut self, error: &PropertyError) {
        warn!("{}.{}: {}", self.shape.name(), error.name(), error);
        self.errors.push(error.clone());
    }

    fn config(&self) -> MediatorConfig {
        self.config
    }
}
