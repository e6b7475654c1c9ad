//! Schema-level output assembly.
//!
//! This module drives the [`ModelEmitter`] over every model and adds the
//! cross-cutting files, producing a [`Manifest`] of `(path, content)` pairs:
//!
//! ```text
//! <output>/
//! ├── index.ts              # re-exports types, utils, services, methods
//! ├── types/
//! │   ├── index.ts          # re-exports every model type
//! │   └── <Model>.ts
//! ├── services/<Model>.ts
//! ├── methods/<Model>.ts
//! └── utils/
//!     ├── apiSettings.ts
//!     ├── getAxiosInstance.ts
//!     └── index.ts
//! ```
//!
//! Generation is a pure function of the [`Schema`]; the manifest is handed
//! once to [`materialize`](crate::materialize::materialize).

use std::path::Path;

use restgen_define::Schema;
use tracing::{debug, info};

use crate::codegen::fragment::TsModule;
use crate::codegen::{
    ModelEmitter, generate_api_settings, generate_client_factory, generate_utils_index,
};
use crate::errors::GeneratorError;
use crate::materialize::materialize;

/// One generated file, addressed relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Forward-slash separated relative path, e.g. `types/User.ts`.
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// The ordered set of files produced by one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    files: Vec<GeneratedFile>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the relative paths in emission order.
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }

    /// Looks up a file's content by relative path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedFile> {
        self.files.iter()
    }
}

impl Extend<GeneratedFile> for Manifest {
    fn extend<I: IntoIterator<Item = GeneratedFile>>(&mut self, iter: I) {
        self.files.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a GeneratedFile;
    type IntoIter = std::slice::Iter<'a, GeneratedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Assembles `types/index.ts`.
pub fn assemble_types_index(schema: &Schema) -> TsModule {
    schema
        .models
        .iter()
        .fold(TsModule::new(), |module, model| {
            module.re_export(format!("./{}", model.name))
        })
}

/// Assembles the top-level `index.ts`.
///
/// Re-exports types and utils, then every service, then every query API.
pub fn assemble_entry_point(schema: &Schema) -> TsModule {
    let module = TsModule::new().re_export("./types").re_export("./utils");

    let module = schema.models.iter().fold(module, |module, model| {
        module.re_export(format!("./services/{}", model.name))
    });

    schema.models.iter().fold(module, |module, model| {
        module.re_export(format!("./methods/{}", model.name))
    })
}

/// Generates the full manifest for a schema.
///
/// Per-model files come first in model order, followed by the type index,
/// the entry point, and the fixed utility modules.
pub fn generate(schema: &Schema) -> Manifest {
    info!(models = schema.models.len(), "Generating client");

    let mut manifest = Manifest::new();

    for model in &schema.models {
        manifest.extend(ModelEmitter::new(schema, model).emit());
    }

    manifest.push(GeneratedFile::new(
        "types/index.ts",
        assemble_types_index(schema).render(),
    ));
    manifest.push(GeneratedFile::new(
        "index.ts",
        assemble_entry_point(schema).render(),
    ));
    manifest.push(GeneratedFile::new(
        "utils/apiSettings.ts",
        generate_api_settings().render(),
    ));
    manifest.push(GeneratedFile::new(
        "utils/getAxiosInstance.ts",
        generate_client_factory().render(),
    ));
    manifest.push(GeneratedFile::new(
        "utils/index.ts",
        generate_utils_index().render(),
    ));

    debug!(files = manifest.len(), "Manifest assembled");
    manifest
}

/// Generates the client and writes it to `output_dir`.
///
/// With `dry_run`, every file is printed to stdout as `=== <path> ===`
/// followed by its content and the output directory is left untouched.
///
/// ## Errors
///
/// Returns an error if the output directory cannot be replaced or any file
/// cannot be written. Partial output may remain on disk.
pub fn generate_and_write(
    schema: &Schema,
    output_dir: &Path,
    dry_run: bool,
) -> Result<Manifest, GeneratorError> {
    let manifest = generate(schema);

    if dry_run {
        for file in &manifest {
            println!("=== {} ===\n{}", file.path, file.content);
        }
    } else {
        let report = materialize(&manifest, output_dir)?;
        info!(
            files = report.files_written,
            directory = %output_dir.display(),
            replaced = report.replaced_existing,
            "Client written"
        );
    }

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{blog_schema, user_schema};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn single_model_layout() {
        let manifest = generate(&user_schema());
        assert_eq!(
            manifest.paths(),
            vec![
                "types/User.ts",
                "services/User.ts",
                "methods/User.ts",
                "types/index.ts",
                "index.ts",
                "utils/apiSettings.ts",
                "utils/getAxiosInstance.ts",
                "utils/index.ts"
            ]
        );
    }

    #[test]
    fn empty_schema_still_emits_fixed_files() {
        let manifest = generate(&Schema::default());
        assert_eq!(
            manifest.paths(),
            vec![
                "types/index.ts",
                "index.ts",
                "utils/apiSettings.ts",
                "utils/getAxiosInstance.ts",
                "utils/index.ts"
            ]
        );
    }

    #[test]
    fn types_index_re_exports_every_model() {
        let code = assemble_types_index(&blog_schema()).render();
        assert!(code.contains("export * from './User';"));
        assert!(code.contains("export * from './Team';"));
        assert!(code.contains("export * from './Post';"));
    }

    #[test]
    fn entry_point_orders_re_exports() {
        let code = assemble_entry_point(&blog_schema()).render();
        let types = code.find("export * from './types';").unwrap();
        let utils = code.find("export * from './utils';").unwrap();
        let last_service = code.find("export * from './services/Post';").unwrap();
        let first_method = code.find("export * from './methods/User';").unwrap();

        assert!(types < utils);
        assert!(utils < last_service);
        assert!(last_service < first_method);
    }

    #[test]
    fn utility_files_do_not_depend_on_schema() {
        let a = generate(&Schema::default());
        let b = generate(&blog_schema());

        for path in ["utils/apiSettings.ts", "utils/getAxiosInstance.ts", "utils/index.ts"] {
            assert_eq!(a.get(path), b.get(path), "{path} differs");
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(&blog_schema()), generate(&blog_schema()));
    }

    #[test]
    fn every_file_starts_with_notice() {
        for file in &generate(&blog_schema()) {
            assert!(
                file.content
                    .starts_with(crate::codegen::fragment::GENERATED_NOTICE),
                "{} lacks notice",
                file.path
            );
        }
    }

    #[test]
    fn dry_run_leaves_output_untouched() {
        let temp = TempDir::new().unwrap();
        let output_dir = temp.path().join("generated");

        let manifest = generate_and_write(&user_schema(), &output_dir, true).unwrap();

        assert!(!manifest.is_empty());
        assert!(!output_dir.exists());
    }

    #[test]
    fn writes_manifest_to_disk() {
        let temp = TempDir::new().unwrap();
        let output_dir = temp.path().join("generated");

        let manifest = generate_and_write(&user_schema(), &output_dir, false).unwrap();

        for file in &manifest {
            let written = fs::read_to_string(output_dir.join(&file.path)).unwrap();
            assert_eq!(written, file.content);
        }
    }
}
