//! restgen code generator library.
//!
//! Generates a typed TypeScript REST client from a restgen schema (see
//! `restgen-define`). For every model the client contains:
//!
//! - A record interface (`types/<Model>.ts`)
//! - A `<Model>CRUD` service over `/crud/<model>` (`services/<Model>.ts`)
//! - A `<Model>SearchInput` filter shape and a `<Model>API` object with
//!   search and relationship accessors over `/api/<model>` (`methods/<Model>.ts`)
//!
//! plus a type index, an entry point, and a fixed endpoint-configuration
//! utility pair.
//!
//! ## Modules
//!
//! - [`naming`] - Identifier case conversion
//! - [`typemap`] - Schema type tags to TypeScript types
//! - [`codegen`] - Per-model and utility module generation
//! - [`output`] - Schema-wide assembly into a [`Manifest`](output::Manifest)
//! - [`materialize`] - Writing a manifest to disk
//! - [`source`] - Fetching the schema document
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use restgen_define::{Field, FieldType, Model, Schema};
//! use restgen_gen::output::generate;
//!
//! let schema = Schema::new(vec![
//!     Model::new("User").with_field(Field::new("FullName", FieldType::String)),
//! ]);
//!
//! let manifest = generate(&schema);
//! let user = manifest.get("types/User.ts").unwrap();
//! assert!(user.contains("fullName: string; // full_name"));
//! ```

pub mod codegen;
pub mod errors;
pub mod materialize;
pub mod naming;
pub mod output;
pub mod source;
pub mod typemap;

#[cfg(test)]
pub(crate) mod test_utils;
