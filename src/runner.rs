use anyhow::{Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, warn};

use crate::cli::{Cli, OutputFormat};
use crate::manifest::Manifest;
use crate::paths;
use crate::scaffold;

pub fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.write_manifest {
        let path = utf8(path)?;
        Manifest::clean_architecture().write_to(&path, cli.force)?;
        println!("Wrote manifest to {}", path);
        return Ok(());
    }

    let manifest = load_manifest(&cli)?;
    let base = match &cli.base {
        Some(base) => paths::explicit_base_dir(base)?,
        None => paths::resolve_base_dir(manifest.target())?,
    };
    info!(base = %base, entries = manifest.len(), "scaffolding directories");
    if cli.dry_run {
        warn!("dry run; no directories will be created");
    }

    let report = scaffold::scaffold(&base, &manifest, cli.dry_run)?;
    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text(cli.verbose > 0)),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }
    Ok(())
}

fn load_manifest(cli: &Cli) -> Result<Manifest> {
    match &cli.file {
        Some(path) => {
            let path = utf8(path)?;
            info!(manifest = %path, "loading manifest");
            Manifest::load(&path)
        }
        None => Ok(Manifest::clean_architecture()),
    }
}

fn utf8(path: &std::path::Path) -> Result<Utf8PathBuf> {
    Utf8Path::from_path(path)
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| anyhow!("path {} is not valid UTF-8", path.display()))
}
