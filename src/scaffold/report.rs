use std::fmt::Write as _;

use anyhow::Result;
use camino::Utf8PathBuf;
use serde::Serialize;

/// Outcome of a scaffold run.
#[derive(Debug)]
pub struct ScaffoldReport {
    pub base: Utf8PathBuf,
    pub dry_run: bool,
    pub directories: Vec<Utf8PathBuf>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    base: &'a str,
    dry_run: bool,
    count: usize,
    directories: Vec<&'a str>,
}

impl ScaffoldReport {
    pub fn count(&self) -> usize {
        self.directories.len()
    }

    pub fn summary(&self) -> String {
        if self.dry_run {
            format!("Dry run: {} directories would be created", self.count())
        } else {
            format!("Successfully created {} directories", self.count())
        }
    }

    pub fn render_text(&self, list_paths: bool) -> String {
        let mut out = String::new();
        if list_paths {
            let verb = if self.dry_run { "would create" } else { "created" };
            for dir in &self.directories {
                let _ = writeln!(out, "  {} {}", verb, dir);
            }
        }
        let _ = writeln!(out, "{}", self.summary());
        out
    }

    pub fn render_json(&self) -> Result<String> {
        let report = JsonReport {
            base: self.base.as_str(),
            dry_run: self.dry_run,
            count: self.count(),
            directories: self.directories.iter().map(|d| d.as_str()).collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
