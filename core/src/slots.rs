//! Slot storage for a single host instance.
//!
//! A `Slots` value is the explicit property bag behind a host: one slot per
//! declared field, fixed at creation time. Writes replace slot contents but
//! never add or remove slots.

use crate::{PropertyError, PropertyResult, Value};
use std::collections::HashMap;

/// The declared storage slots of one host instance.
#[derive(Debug, Clone, Default)]
pub struct Slots {
    /// Slot names in declaration order.
    names: Vec<String>,
    /// Current slot contents.
    values: HashMap<String, Value>,
    /// Bumped on every successful write or clear.
    version: u64,
}

impl Slots {
    /// Create slots from `(name, initial value)` pairs.
    ///
    /// Later duplicates of a name overwrite the earlier initial value but
    /// keep the first declaration position.
    pub fn declare<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut values = HashMap::new();
        for (name, value) in slots {
            let name = name.into();
            if values.insert(name.clone(), value).is_none() {
                names.push(name);
            }
        }
        Self {
            names,
            values,
            version: 0,
        }
    }

    /// Get a slot's value, or None when no slot is declared under `name`.
    pub fn read(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Replace a slot's value, returning the previous one.
    pub fn write(&mut self, name: &str, value: impl Into<Value>) -> PropertyResult<Value> {
        let slot = self
            .values
            .get_mut(name)
            .ok_or_else(|| PropertyError::UndeclaredSlot(name.to_string()))?;
        let previous = std::mem::replace(slot, value.into());
        self.version += 1;
        Ok(previous)
    }

    /// Reset a slot to null, returning the previous value.
    pub fn clear(&mut self, name: &str) -> PropertyResult<Value> {
        self.write(name, Value::Null)
    }

    /// Check if a slot is declared under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Check if the slot exists and holds a non-null value.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|v| !v.is_null())
    }

    /// Number of successful writes since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.names
            .iter()
            .filter_map(|name| self.values.get(name).map(|v| (name.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Slots {
        Slots::declare([("name", Value::Null), ("age", Value::Int(0))])
    }

    #[test]
    fn test_declare_and_read() {
        let slots = person();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots.read("name"), Some(&Value::Null));
        assert_eq!(slots.read("age"), Some(&Value::Int(0)));
        assert_eq!(slots.read("email"), None);
        assert_eq!(slots.version(), 0);
    }

    #[test]
    fn test_write_returns_previous_and_bumps_version() {
        let mut slots = person();

        let previous = slots.write("age", 41i64).unwrap();
        assert_eq!(previous, Value::Int(0));
        assert_eq!(slots.read("age"), Some(&Value::Int(41)));
        assert_eq!(slots.version(), 1);
    }

    #[test]
    fn test_write_never_creates_slots() {
        let mut slots = person();

        let result = slots.write("email", "a@b.com");
        assert_eq!(result, Err(PropertyError::UndeclaredSlot("email".into())));
        assert!(!slots.contains("email"));
        assert_eq!(slots.version(), 0);
    }

    #[test]
    fn test_is_set_tracks_null() {
        let mut slots = person();
        assert!(slots.contains("name"));
        assert!(!slots.is_set("name"));

        slots.write("name", "Alice").unwrap();
        assert!(slots.is_set("name"));

        slots.clear("name").unwrap();
        assert!(!slots.is_set("name"));
        assert!(slots.contains("name"));
    }

    #[test]
    fn test_iter_keeps_declaration_order() {
        let slots = Slots::declare([
            ("b", Value::Null),
            ("a", Value::Int(1)),
            ("b", Value::Int(2)),
        ]);

        let names: Vec<_> = slots.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(slots.read("b"), Some(&Value::Int(2)));
    }
}
