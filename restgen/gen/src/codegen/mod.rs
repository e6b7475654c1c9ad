//! TypeScript generation for restgen.
//!
//! Generators build structured fragments (see [`fragment`]) which render to
//! deterministic TypeScript text. Nothing here performs I/O.
//!
//! ## Submodules
//!
//! - [`type_def`] - Record interfaces (`types/<Model>.ts`)
//! - [`crud`] - `<Model>CRUD` services (`services/<Model>.ts`)
//! - [`search`] - `<Model>SearchInput` filter interfaces
//! - [`query_api`] - `<Model>API` search and relationship accessors (`methods/<Model>.ts`)
//! - [`utils`] - Fixed endpoint settings and HTTP client factory (`utils/*.ts`)
//! - [`model`] - [`ModelEmitter`], composing the three per-model files
//!
//! See [`crate::output`] for assembling a whole schema into a manifest.

pub mod axios;
pub mod crud;
pub mod fragment;
pub mod model;
pub mod query_api;
pub mod search;
pub mod type_def;
pub mod utils;

pub use crud::{CrudOperation, generate_crud_module};
pub use model::ModelEmitter;
pub use query_api::generate_query_module;
pub use search::{SearchClause, generate_search_input};
pub use type_def::generate_type_module;
pub use utils::{generate_api_settings, generate_client_factory, generate_utils_index};
