//! The host contract and the mediated property operations.
//!
//! A host supplies three things: its static [`Shape`] (fields, aliases,
//! accessor registry), the [`Slots`] holding its current values, and an
//! error collaborator. [`Mediate`] layers `set`/`get`/`has`/`is_set` on top
//! of any host.
//!
//! Resolution differs between reads and writes:
//! - `set` resolves the name (field, then alias) and dispatches to the
//!   setter registered for the *resolved* field, falling back to a raw
//!   slot write.
//! - `get` first dispatches to a getter registered under the *literal*
//!   requested name, bypassing aliases, and only then resolves the name and
//!   reads the raw slot.
//!
//! Unknown names never panic: they are reported to the host and returned
//! as `false` or `Err`.

use crate::MediatorConfig;
use log::{debug, trace};
use propmed_core::{Attributes, PropertyError, PropertyResult, Slots, Value};
use propmed_registry::Shape;

/// An object whose named properties are accessed through the mediator.
pub trait Host {
    /// The static shape of this host's type.
    fn shape(&self) -> &Shape;

    /// Current slot values.
    fn slots(&self) -> &Slots;

    fn slots_mut(&mut self) -> &mut Slots;

    /// Error collaborator, called once per failed operation.
    fn error(&mut self, error: &PropertyError);

    fn config(&self) -> MediatorConfig {
        MediatorConfig::default()
    }
}

/// Mediated property access, available on every [`Host`].
pub trait Mediate: Host {
    /// Write a property by field or alias name.
    ///
    /// Returns `true` once the custom setter for the resolved field has been
    /// invoked, or the raw slot has been written when there is no setter.
    /// A setter that declines the value still counts as success unless
    /// `surface_setter_rejections` is enabled. Unknown names are reported
    /// and return `false` without touching any slot.
    fn set(&mut self, name: &str, value: impl Into<Value>) -> bool {
        let Some(field) = self.resolve(name) else {
            trace!("{}: set({}) did not resolve", self.shape().name(), name);
            report(self, PropertyError::unknown(name));
            return false;
        };
        let value = value.into();

        match self.shape().setter(&field).cloned() {
            Some(setter) => {
                trace!("{}: set({}) -> setter for {}", self.shape().name(), name, field);
                match setter(self.slots_mut(), value) {
                    Ok(()) => true,
                    Err(err) if self.config().surface_setter_rejections => {
                        report(self, err);
                        false
                    }
                    Err(err) => {
                        debug!(
                            "{}: setter for {} declined value: {}",
                            self.shape().name(),
                            field,
                            err
                        );
                        true
                    }
                }
            }
            None => {
                trace!("{}: set({}) -> slot {}", self.shape().name(), name, field);
                match self.slots_mut().write(&field, value) {
                    Ok(_) => true,
                    Err(err) => {
                        report(self, err);
                        false
                    }
                }
            }
        }
    }

    /// Read a property by literal getter name, field, or alias.
    fn get(&mut self, name: &str) -> PropertyResult<Value> {
        if let Some(getter) = self.shape().getter(name) {
            trace!("{}: get({}) -> getter", self.shape().name(), name);
            return Ok(getter(self.slots()));
        }

        let value = match self.shape().resolve(name) {
            Some(field) => self
                .slots()
                .read(field)
                .cloned()
                .ok_or_else(|| PropertyError::UndeclaredSlot(field.to_string())),
            None => Err(PropertyError::unknown(name)),
        };

        value.map_err(|err| {
            trace!("{}: get({}) failed: {}", self.shape().name(), name, err);
            report(self, err.clone());
            err
        })
    }

    /// Check if `name` is a declared field of the host's shape, regardless
    /// of aliases or the current value.
    fn has(&self, name: &str) -> bool {
        self.shape().has_field(name)
    }

    /// Check if the field `name` currently holds a non-null value. No alias
    /// resolution or accessor dispatch takes place.
    fn is_set(&self, name: &str) -> bool {
        self.slots().is_set(name)
    }

    /// The real field a write to `name` would target.
    fn resolve(&self, name: &str) -> Option<String> {
        self.shape().resolve(name).map(str::to_owned)
    }

    /// Mediated `set` for every entry, in name order. Returns how many were
    /// accepted.
    fn fill(&mut self, values: Attributes) -> usize {
        let mut entries: Vec<_> = values.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
            .into_iter()
            .filter(|(name, value)| self.set(name, value.clone()))
            .count()
    }
}

impl<H: Host + ?Sized> Mediate for H {}

/// Hand a failure to the host's error collaborator, honouring
/// `report_unknown`.
fn report<H: Host + ?Sized>(host: &mut H, error: PropertyError) {
    if error.is_unknown() && !host.config().report_unknown {
        return;
    }
    host.error(&error);
}
