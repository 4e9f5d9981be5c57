pub mod report;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::manifest::Manifest;
use crate::paths::display_relative;
use crate::util;

pub use report::ScaffoldReport;

/// Create every manifest entry under `base`, in manifest order.
///
/// Existing directories are left untouched. The first failure aborts the
/// run; directories created before it stay on disk.
pub fn ensure_structure(base: &Utf8Path, manifest: &Manifest) -> Result<Vec<Utf8PathBuf>> {
    let mut created = Vec::with_capacity(manifest.len());
    for entry in manifest.directories() {
        let full_path = base.join(entry);
        util::fs::ensure_dir(full_path.as_std_path())
            .with_context(|| format!("creating directory {}", full_path))?;
        debug!(path = %full_path, "ensured directory");
        created.push(display_relative(base, entry));
    }
    Ok(created)
}

/// Same paths as [`ensure_structure`] without touching the filesystem.
pub fn plan_structure(base: &Utf8Path, manifest: &Manifest) -> Vec<Utf8PathBuf> {
    manifest
        .directories()
        .iter()
        .map(|entry| display_relative(base, entry))
        .collect()
}

pub fn scaffold(base: &Utf8Path, manifest: &Manifest, dry_run: bool) -> Result<ScaffoldReport> {
    let directories = if dry_run {
        plan_structure(base, manifest)
    } else {
        ensure_structure(base, manifest)?
    };
    Ok(ScaffoldReport {
        base: base.to_owned(),
        dry_run,
        directories,
    })
}
