//! propmed
//!
//! Mediated property access for arbitrary hosts. A host exposes a static
//! shape (declared fields, alias table, custom accessor registry), its slot
//! storage and an error collaborator; the [`Mediate`] operations resolve
//! names against the shape and dispatch to custom accessors or raw slots.
//!
//! ```
//! use propmed::{Mediate, Record, ShapeBuilder, Value};
//!
//! let shape = ShapeBuilder::new("Contact")
//!     .fields(["email"])
//!     .alias("mail", "email")
//!     .build()
//!     .unwrap();
//!
//! let mut contact = Record::new(shape);
//! assert!(contact.set("mail", "a@b.com"));
//! assert_eq!(contact.get("email"), Ok(Value::from("a@b.com")));
//! assert!(!contact.set("fax", "n/a"));
//! ```

mod config;
mod host;
mod record;

pub use config::MediatorConfig;
pub use host::{Host, Mediate};
pub use record::Record;

pub use propmed_core::{attrs, Attributes, PropertyError, PropertyResult, Slots, Value};
pub use propmed_registry::{Accessors, FieldDef, Getter, Setter, Shape, ShapeBuilder, ShapeError};
