use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Create the Clean Architecture folder layout next to this program.
///
/// With no arguments, every manifest directory is created under
/// `<program dir>/../src`.
#[derive(Parser, Debug)]
#[command(name = "create-structure", version)]
pub struct Cli {
    /// Create directories under this path instead of `<program dir>/../src`.
    #[arg(short = 'b', long = "base")]
    pub base: Option<PathBuf>,
    /// Read the manifest from a TOML file instead of the built-in layout.
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,
    /// Report what would be created without touching the filesystem.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    /// List each directory; repeat to raise the log level.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Summary format.
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the built-in manifest as TOML to this path and exit.
    #[arg(long = "write-manifest", value_name = "FILE", conflicts_with_all = ["base", "file", "dry_run"])]
    pub write_manifest: Option<PathBuf>,
    /// Allow `--write-manifest` to overwrite an existing file.
    #[arg(long = "force", requires = "write_manifest")]
    pub force: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["create-structure"]).unwrap();
        assert!(cli.base.is_none());
        assert!(cli.file.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "create-structure",
            "-b",
            "out",
            "-f",
            "layout.toml",
            "-n",
            "-vv",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.base, Some(PathBuf::from("out")));
        assert_eq!(cli.file, Some(PathBuf::from("layout.toml")));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn force_requires_write_manifest() {
        assert!(Cli::try_parse_from(["create-structure", "--force"]).is_err());
        assert!(
            Cli::try_parse_from(["create-structure", "--write-manifest", "m.toml", "--force"])
                .is_ok()
        );
    }
}
