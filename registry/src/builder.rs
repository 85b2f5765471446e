//! ShapeBuilder for constructing an immutable Shape.

use crate::{Accessors, FieldDef, Getter, Setter, Shape};
use propmed_core::{PropertyResult, Slots, Value};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during shape construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("Empty name in shape {0}")]
    EmptyName(String),

    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    #[error("Duplicate alias name: {0}")]
    DuplicateAlias(String),

    #[error("Alias {0} shadows a declared field")]
    AliasShadowsField(String),

    #[error("Alias {alias} points at unknown field {target}")]
    UnknownAliasTarget { alias: String, target: String },

    #[error("Alias {alias} points at another alias {target}")]
    AliasChain { alias: String, target: String },

    #[error("Duplicate getter for: {0}")]
    DuplicateGetter(String),

    #[error("Duplicate setter for: {0}")]
    DuplicateSetter(String),

    #[error("Setter registered for unknown field: {0}")]
    SetterForUnknownField(String),
}

/// Builder for constructing an immutable Shape.
///
/// Declarations are recorded as given; all validation happens in `build`.
pub struct ShapeBuilder {
    name: String,
    fields: Vec<FieldDef>,
    aliases: Vec<(String, String)>,
    getters: Vec<(String, Getter)>,
    setters: Vec<(String, Setter)>,
}

impl ShapeBuilder {
    /// Create a new builder for a shape called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            aliases: Vec::new(),
            getters: Vec::new(),
            setters: Vec::new(),
        }
    }

    /// Declare a field.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare several fields without defaults.
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(FieldDef::new));
        self
    }

    /// Add an alias pointing at a real field.
    pub fn alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), target.into()));
        self
    }

    /// Register a custom getter under `name`. The name need not be a
    /// declared field; getters for undeclared names act as computed
    /// properties.
    pub fn getter<F>(mut self, name: impl Into<String>, getter: F) -> Self
    where
        F: Fn(&Slots) -> Value + Send + Sync + 'static,
    {
        self.getters.push((name.into(), Arc::new(getter)));
        self
    }

    /// Register a custom setter for the declared field `field`.
    pub fn setter<F>(mut self, field: impl Into<String>, setter: F) -> Self
    where
        F: Fn(&mut Slots, Value) -> PropertyResult<()> + Send + Sync + 'static,
    {
        self.setters.push((field.into(), Arc::new(setter)));
        self
    }

    /// Build the immutable Shape.
    pub fn build(self) -> Result<Shape, ShapeError> {
        let empty = || ShapeError::EmptyName(self.name.clone());

        // Fields
        let mut fields = HashMap::new();
        let mut field_order = Vec::new();
        for field in self.fields {
            if field.name.is_empty() {
                return Err(empty());
            }
            if fields.contains_key(&field.name) {
                return Err(ShapeError::DuplicateField(field.name));
            }
            field_order.push(field.name.clone());
            fields.insert(field.name.clone(), field);
        }

        // Aliases: single indirection onto declared fields only
        let alias_names: Vec<&str> = self.aliases.iter().map(|(a, _)| a.as_str()).collect();
        let mut aliases = HashMap::new();
        for (alias, target) in &self.aliases {
            if alias.is_empty() || target.is_empty() {
                return Err(empty());
            }
            if fields.contains_key(alias) {
                return Err(ShapeError::AliasShadowsField(alias.clone()));
            }
            if aliases.contains_key(alias) {
                return Err(ShapeError::DuplicateAlias(alias.clone()));
            }
            if !fields.contains_key(target) {
                if alias_names.contains(&target.as_str()) {
                    return Err(ShapeError::AliasChain {
                        alias: alias.clone(),
                        target: target.clone(),
                    });
                }
                return Err(ShapeError::UnknownAliasTarget {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
            aliases.insert(alias.clone(), target.clone());
        }

        // Accessor registry
        let mut accessors: HashMap<String, Accessors> = HashMap::new();
        for (name, getter) in self.getters {
            if name.is_empty() {
                return Err(empty());
            }
            let entry = accessors.entry(name.clone()).or_default();
            if entry.has_getter() {
                return Err(ShapeError::DuplicateGetter(name));
            }
            entry.getter = Some(getter);
        }
        for (field, setter) in self.setters {
            if field.is_empty() {
                return Err(empty());
            }
            if !fields.contains_key(&field) {
                return Err(ShapeError::SetterForUnknownField(field));
            }
            let entry = accessors.entry(field.clone()).or_default();
            if entry.has_setter() {
                return Err(ShapeError::DuplicateSetter(field));
            }
            entry.setter = Some(setter);
        }

        Ok(Shape::new(self.name, fields, field_order, aliases, accessors))
    }
}
