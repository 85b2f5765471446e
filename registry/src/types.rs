//! Shape definition types.

use propmed_core::{PropertyResult, Slots, Value};
use std::fmt;
use std::sync::Arc;

/// Custom read accessor. Computes a value from the host's slots.
pub type Getter = Arc<dyn Fn(&Slots) -> Value + Send + Sync>;

/// Custom write accessor. Receives the host's slots and the incoming value.
pub type Setter = Arc<dyn Fn(&mut Slots, Value) -> PropertyResult<()> + Send + Sync>;

/// Field definition within a shape.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Initial slot value; null when absent.
    pub default: Option<Value>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// The value a fresh slot for this field starts with.
    pub fn initial_value(&self) -> Value {
        self.default.clone().unwrap_or(Value::Null)
    }
}

/// The custom accessors registered under one name.
#[derive(Clone, Default)]
pub struct Accessors {
    pub getter: Option<Getter>,
    pub setter: Option<Setter>,
}

impl Accessors {
    pub fn has_getter(&self) -> bool {
        self.getter.is_some()
    }

    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }
}

impl fmt::Debug for Accessors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors")
            .field("getter", &self.getter.as_ref().map(|_| "<fn>"))
            .field("setter", &self.setter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
