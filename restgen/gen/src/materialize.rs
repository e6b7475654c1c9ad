//! Committing a manifest to the file system.
//!
//! Regeneration is destructive: an existing output directory is removed
//! wholesale before anything is written, so files that no longer correspond
//! to the schema never survive a run. Writes are sequential and plain (no
//! temp-file swap); the first failure aborts and partial output may remain.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::GeneratorError;
use crate::output::Manifest;

/// Summary of one materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeReport {
    pub files_written: usize,
    /// Whether a previous output tree was removed.
    pub replaced_existing: bool,
}

/// Resolves a manifest path under `output_dir`.
///
/// Only plain relative components are accepted.
fn resolve(output_dir: &Path, relative: &str) -> Result<PathBuf, GeneratorError> {
    let path = Path::new(relative);
    let plain = path.components().next().is_some()
        && path.components().all(|c| matches!(c, Component::Normal(_)));

    if plain {
        Ok(output_dir.join(path))
    } else {
        Err(GeneratorError::UnsafePath(relative.to_string()))
    }
}

fn create_dir(path: &Path) -> Result<(), GeneratorError> {
    fs::create_dir_all(path).map_err(|e| GeneratorError::CreateDir {
        path: path.display().to_string(),
        source: e,
    })
}

/// Replaces `output_dir` with exactly the files in `manifest`.
///
/// ## Errors
///
/// - [`GeneratorError::UnsafePath`] if an entry is absolute or contains
///   `.`/`..` components. Checked before the directory is touched.
/// - [`GeneratorError::RemoveDir`], [`GeneratorError::CreateDir`], or
///   [`GeneratorError::WriteError`] on I/O failure.
pub fn materialize(manifest: &Manifest, output_dir: &Path) -> Result<MaterializeReport, GeneratorError> {
    let targets = manifest
        .iter()
        .map(|file| resolve(output_dir, &file.path).map(|target| (target, file)))
        .collect::<Result<Vec<_>, _>>()?;

    let replaced_existing = output_dir.exists();
    if replaced_existing {
        warn!(directory = %output_dir.display(), "Removing existing output directory");
        fs::remove_dir_all(output_dir).map_err(|e| GeneratorError::RemoveDir {
            path: output_dir.display().to_string(),
            source: e,
        })?;
    }
    create_dir(output_dir)?;

    for (target, file) in &targets {
        if let Some(parent) = target.parent() {
            create_dir(parent)?;
        }
        fs::write(target, &file.content).map_err(|e| GeneratorError::WriteError {
            path: target.display().to_string(),
            source: e,
        })?;
        debug!(path = %file.path, bytes = file.content.len(), "Wrote file");
    }

    info!(files = targets.len(), directory = %output_dir.display(), "Materialized output");

    Ok(MaterializeReport {
        files_written: targets.len(),
        replaced_existing,
    })
}
