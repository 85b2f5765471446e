//! The Shape - immutable per-type property lookup.

use crate::{Accessors, FieldDef, Getter, Setter};
use propmed_core::Slots;
use std::collections::HashMap;

/// The static shape of a host type: its declared fields, alias table and
/// custom accessor registry. Immutable after construction.
#[derive(Debug)]
pub struct Shape {
    /// Shape name, used in diagnostics.
    name: String,

    /// Field definitions by name.
    fields: HashMap<String, FieldDef>,
    /// Field names in declaration order.
    field_order: Vec<String>,

    /// Alias name to real field name.
    aliases: HashMap<String, String>,

    /// Custom accessors by name.
    accessors: HashMap<String, Accessors>,
}

impl Shape {
    /// Create a shape (use ShapeBuilder for construction).
    pub(crate) fn new(
        name: String,
        fields: HashMap<String, FieldDef>,
        field_order: Vec<String>,
        aliases: HashMap<String, String>,
        accessors: HashMap<String, Accessors>,
    ) -> Self {
        Self {
            name,
            fields,
            field_order,
            aliases,
            accessors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ==================== Fields ====================

    /// Check if `name` is a declared field. Aliases do not count.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Get all field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.field_order.iter().map(|s| s.as_str())
    }

    pub fn field_count(&self) -> usize {
        self.field_order.len()
    }

    // ==================== Aliases ====================

    /// Get the real field an alias points at.
    pub fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(|s| s.as_str())
    }

    /// Get every alias pointing at `field`, sorted by name.
    pub fn aliases_of(&self, field: &str) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, target)| target.as_str() == field)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    pub fn has_aliases(&self) -> bool {
        !self.aliases.is_empty()
    }

    /// Resolve a requested name to a real field: the name itself if it is a
    /// field, otherwise its alias target. None when neither applies.
    pub fn resolve<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.has_field(name) {
            Some(name)
        } else {
            self.alias_target(name)
        }
    }

    // ==================== Accessors ====================

    /// Get the accessors registered under `name`.
    pub fn accessors(&self, name: &str) -> Option<&Accessors> {
        self.accessors.get(name)
    }

    /// Get the custom getter registered under the literal `name`.
    pub fn getter(&self, name: &str) -> Option<&Getter> {
        self.accessors.get(name).and_then(|a| a.getter.as_ref())
    }

    /// Get the custom setter registered for the real field `field`.
    pub fn setter(&self, field: &str) -> Option<&Setter> {
        self.accessors.get(field).and_then(|a| a.setter.as_ref())
    }

    // ==================== Instances ====================

    /// Create fresh slots for every declared field, seeded with defaults.
    pub fn instantiate(&self) -> Slots {
        Slots::declare(self.field_order.iter().filter_map(|name| {
            self.fields
                .get(name)
                .map(|def| (name.clone(), def.initial_value()))
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::{FieldDef, ShapeBuilder};
    use propmed_core::Value;

    fn contact() -> crate::Shape {
        ShapeBuilder::new("Contact")
            .field(FieldDef::new("email"))
            .field(FieldDef::new("phone"))
            .field(FieldDef::new("active").with_default(true))
            .alias("mail", "email")
            .alias("e_mail", "email")
            .alias("tel", "phone")
            .getter("display", |slots| {
                slots.read("email").cloned().unwrap_or_default()
            })
            .build()
            .unwrap()
    }

    // ========== TEST: resolve_field ==========
    #[test]
    fn test_resolve_field() {
        // GIVEN shape with field email
        let shape = contact();

        // WHEN resolve("email")
        // THEN returns the field itself
        assert_eq!(shape.resolve("email"), Some("email"));
    }

    // ========== TEST: resolve_alias ==========
    #[test]
    fn test_resolve_alias() {
        // GIVEN shape with alias mail -> email
        let shape = contact();

        // WHEN resolve("mail")
        // THEN returns the aliased field
        assert_eq!(shape.resolve("mail"), Some("email"));
    }

    // ========== TEST: resolve_missing ==========
    #[test]
    fn test_resolve_missing() {
        // GIVEN shape with an alias table that lacks "fax"
        let shape = contact();

        // WHEN resolve("fax")
        // THEN returns None instead of faulting
        assert_eq!(shape.resolve("fax"), None);
        assert_eq!(shape.alias_target("fax"), None);
    }

    #[test]
    fn test_aliases_of() {
        let shape = contact();

        assert_eq!(shape.aliases_of("email"), vec!["e_mail", "mail"]);
        assert_eq!(shape.aliases_of("phone"), vec!["tel"]);
        assert!(shape.aliases_of("active").is_empty());
        assert!(shape.has_aliases());
    }

    #[test]
    fn test_has_field_ignores_aliases_and_getters() {
        let shape = contact();

        assert!(shape.has_field("email"));
        assert!(!shape.has_field("mail"));
        assert!(!shape.has_field("display"));
        assert!(shape.getter("display").is_some());
    }

    #[test]
    fn test_instantiate_seeds_defaults_in_order() {
        let shape = contact();
        let slots = shape.instantiate();

        let names: Vec<_> = slots.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["email", "phone", "active"]);
        assert_eq!(slots.read("email"), Some(&Value::Null));
        assert_eq!(slots.read("active"), Some(&Value::Bool(true)));
        assert_eq!(shape.field_count(), 3);
    }

    #[test]
    fn test_field_names_in_declaration_order() {
        let shape = contact();
        let names: Vec<_> = shape.field_names().collect();
        assert_eq!(names, vec!["email", "phone", "active"]);
        assert_eq!(shape.name(), "Contact");
    }
}
