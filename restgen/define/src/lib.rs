//! Restgen Schema Library
//!
//! This crate provides the input data model for the `restgen` client generator:
//! a declarative description of data models, their fields, and the typed
//! relationships (edges) between them. Values are deserialized from the JSON
//! schema document served by the backend and are never mutated afterwards.
//!
//! ## Core Types
//!
//! - [`Schema`] - The root document, an ordered list of models
//! - [`Model`] - A named entity with fields and edges
//! - [`Field`] - A named, typed, optionally-nullable attribute
//! - [`Edge`] - A named relationship to another model with a [`Direction`]
//! - [`FieldType`] - The closed vocabulary of field type tags plus a
//!   [`FieldType::Reference`] variant for everything else
//!
//! ## Examples
//!
//! ```
//! use restgen_define::{Direction, FieldType, Schema};
//!
//! let json = r#"{
//!     "models": [{
//!         "model_name": "User",
//!         "fields": [{ "field_name": "FullName", "type": "string", "is_optional": false }],
//!         "edges": [{ "edge_name": "team", "type": "Team", "direction": "to" }]
//!     }]
//! }"#;
//!
//! let schema: Schema = serde_json::from_str(json).unwrap();
//! let user = &schema.models[0];
//!
//! assert_eq!(user.name, "User");
//! assert_eq!(user.fields[0].field_type, FieldType::String);
//! assert_eq!(user.edges[0].direction, Direction::To);
//! ```

pub mod schema;
pub mod types;

// Re-export main types at crate root
pub use schema::{Edge, Field, Model, Schema};
pub use types::{Direction, FieldType};
