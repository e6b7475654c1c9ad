//! Per-model emission.
//!
//! [`ModelEmitter`] turns one [`Model`] into its three files:
//!
//! ```text
//! types/<Model>.ts      # record interface
//! services/<Model>.ts   # <Model>CRUD
//! methods/<Model>.ts    # <Model>SearchInput + <Model>API
//! ```

use restgen_define::{Model, Schema};
use tracing::debug;

use super::crud::generate_crud_module;
use super::fragment::TsModule;
use super::query_api::generate_query_module;
use super::type_def::generate_type_module;
use crate::output::GeneratedFile;

/// Emits the files belonging to a single model.
#[derive(Debug, Clone, Copy)]
pub struct ModelEmitter<'a> {
    schema: &'a Schema,
    model: &'a Model,
}

impl<'a> ModelEmitter<'a> {
    /// `model` is expected to be one of `schema.models`.
    pub fn new(schema: &'a Schema, model: &'a Model) -> Self {
        Self { schema, model }
    }

    pub fn type_definition(&self) -> TsModule {
        generate_type_module(self.model, self.schema)
    }

    pub fn crud_service(&self) -> TsModule {
        generate_crud_module(self.model)
    }

    pub fn query_api(&self) -> TsModule {
        generate_query_module(self.model)
    }

    /// Renders all three files, in `types`, `services`, `methods` order.
    pub fn emit(&self) -> Vec<GeneratedFile> {
        let name = &self.model.name;
        debug!(
            model = %name,
            fields = self.model.fields.len(),
            edges = self.model.edges.len(),
            "Emitting model"
        );

        vec![
            GeneratedFile::new(format!("types/{name}.ts"), self.type_definition().render()),
            GeneratedFile::new(format!("services/{name}.ts"), self.crud_service().render()),
            GeneratedFile::new(format!("methods/{name}.ts"), self.query_api().render()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{blog_schema, user_schema};

    #[test]
    fn emits_three_files_per_model() {
        let schema = user_schema();
        let paths: Vec<String> = ModelEmitter::new(&schema, &schema.models[0])
            .emit()
            .into_iter()
            .map(|f| f.path)
            .collect();

        assert_eq!(
            paths,
            vec!["types/User.ts", "services/User.ts", "methods/User.ts"]
        );
    }

    #[test]
    fn parts_match_rendered_files() {
        let schema = user_schema();
        let emitter = ModelEmitter::new(&schema, &schema.models[0]);
        let files = emitter.emit();

        assert_eq!(files[0].content, emitter.type_definition().render());
        assert_eq!(files[1].content, emitter.crud_service().render());
        assert_eq!(files[2].content, emitter.query_api().render());
    }

    #[test]
    fn emission_is_deterministic() {
        let schema = user_schema();
        let model = &schema.models[0];
        assert_eq!(
            ModelEmitter::new(&schema, model).emit(),
            ModelEmitter::new(&schema, model).emit()
        );
    }

    #[test]
    fn type_file_imports_sibling_models() {
        let schema = blog_schema();
        let post = schema.model("Post").unwrap();
        let types = ModelEmitter::new(&schema, post).type_definition().render();

        assert!(types.contains("import { User } from './User';"));
    }
}
