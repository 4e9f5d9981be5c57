use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};

/// Base directory for a run: `<program dir>/../<target>`.
pub fn resolve_base_dir(target: &str) -> Result<Utf8PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    base_dir_from_program(&exe, target)
}

/// Resolve the base directory relative to a program path.
pub fn base_dir_from_program(program: &Path, target: &str) -> Result<Utf8PathBuf> {
    let program_dir = program
        .parent()
        .ok_or_else(|| anyhow!("program path {} has no parent", program.display()))?;
    let project_dir = program_dir.parent().unwrap_or(program_dir);
    to_utf8(project_dir.join(target))
}

/// Use an explicit base as-is, anchored to the current directory when relative.
pub fn explicit_base_dir(base: &Path) -> Result<Utf8PathBuf> {
    if base.is_absolute() {
        return to_utf8(base.to_path_buf());
    }
    let cwd = std::env::current_dir().context("determining current directory")?;
    to_utf8(cwd.join(base))
}

/// Display form of `path` relative to `base`'s parent, e.g. `src/domain/users`.
pub fn display_relative(base: &Utf8Path, entry: &str) -> Utf8PathBuf {
    match base.file_name() {
        Some(name) => Utf8Path::new(name).join(entry),
        None => Utf8PathBuf::from(entry),
    }
}

fn to_utf8(path: PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| anyhow!("path {} is not valid UTF-8", path.display()))
}
