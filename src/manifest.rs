use std::fs;

use anyhow::{Context, Result, bail};
use camino::{Utf8Component, Utf8Path};
use serde::Deserialize;
use toml_edit::{Array, DocumentMut, Item, Value as EditValue, value};

/// Subfolder, next to the program's parent directory, that receives the layout.
pub const DEFAULT_TARGET: &str = "src";

/// Clean Architecture layout, grouped by layer.
pub const CLEAN_ARCHITECTURE: &[&str] = &[
    // Presentation
    "presentation/controllers",
    "presentation/dtos",
    "presentation/mappers",
    // Application
    "application/auth/use-cases",
    "application/auth/commands",
    "application/auth/queries",
    "application/auth/dtos",
    "application/users",
    "application/shared/interfaces",
    "application/shared/events",
    // Domain
    "domain/auth/entities",
    "domain/auth/value-objects",
    "domain/auth/services",
    "domain/auth/events",
    "domain/auth/repositories",
    "domain/users",
    "domain/roles",
    "domain/permissions",
    "domain/tenants",
    "domain/shared/events",
    "domain/shared/value-objects",
    // Infrastructure
    "infrastructure/persistence/typeorm/repositories",
    "infrastructure/persistence/typeorm/entities",
    "infrastructure/persistence/mappers",
    "infrastructure/events/handlers",
    "infrastructure/external",
];

/// Ordered list of relative directories to scaffold, plus the subfolder they go under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    target: String,
    directories: Vec<String>,
}

/// On-disk shape of a manifest file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default = "default_target")]
    target: String,
    directories: Vec<String>,
}

fn default_target() -> String {
    DEFAULT_TARGET.to_owned()
}

impl Manifest {
    pub fn new(target: impl Into<String>, directories: Vec<String>) -> Self {
        Self {
            target: target.into(),
            directories,
        }
    }

    /// The built-in layout. Trusted, so it skips validation.
    pub fn clean_architecture() -> Self {
        Self::new(
            DEFAULT_TARGET,
            CLEAN_ARCHITECTURE.iter().map(|dir| (*dir).to_owned()).collect(),
        )
    }

    /// Load a manifest from a TOML file and validate every entry.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading manifest {}", path))?;
        Self::parse(&raw).with_context(|| format!("parsing manifest {}", path))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let file: ManifestFile = toml::from_str(raw)?;
        validate_target(&file.target)?;
        if file.directories.is_empty() {
            bail!("manifest lists no directories");
        }
        for entry in &file.directories {
            validate_entry(entry)?;
        }
        Ok(Self::new(file.target, file.directories))
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn to_toml(&self) -> String {
        let mut doc = DocumentMut::new();
        doc["target"] = value(self.target.as_str());

        let mut dirs = Array::new();
        for dir in &self.directories {
            dirs.push_formatted(EditValue::from(dir.as_str()).decorated("\n    ", ""));
        }
        dirs.set_trailing("\n");
        dirs.set_trailing_comma(true);
        doc["directories"] = Item::Value(EditValue::Array(dirs));

        doc.to_string()
    }

    /// Write the TOML rendering to `path`, refusing to clobber unless `force`.
    pub fn write_to(&self, path: &Utf8Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!("{} already exists; rerun with --force to overwrite", path);
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| format!("creating directory {}", parent))?;
        }
        fs::write(path, self.to_toml()).with_context(|| format!("writing manifest {}", path))
    }
}

/// Reject entries that would escape the base directory.
pub fn validate_entry(entry: &str) -> Result<()> {
    if entry.trim().is_empty() {
        bail!("manifest entry must not be empty");
    }
    let path = Utf8Path::new(entry);
    if path.is_absolute() || path.has_root() {
        bail!("manifest entry `{entry}` must be a relative path");
    }
    for component in path.components() {
        match component {
            Utf8Component::Normal(_) | Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                bail!("manifest entry `{entry}` must not contain `..`")
            }
            Utf8Component::RootDir | Utf8Component::Prefix(_) => {
                bail!("manifest entry `{entry}` must be a relative path")
            }
        }
    }
    Ok(())
}

fn validate_target(target: &str) -> Result<()> {
    if target.is_empty() || target == "." || target == ".." {
        bail!("manifest target `{target}` must name a single folder");
    }
    if target.contains(['/', '\\']) {
        bail!("manifest target `{target}` must not contain path separators");
    }
    Ok(())
}
