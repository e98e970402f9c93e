//! Command-line surface.
//!
//! Exactly one positional argument (the template file) is accepted. The
//! version flag short-circuits before any I/O, and every argument
//! problem (none, too many, unknown flags) prints the usage text to
//! stderr and exits 1 rather than clap's default exit 2, because the
//! exit-code contract reserves nonzero codes for "error diagnostics were
//! produced" and usage errors count as one.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::pipeline;

/// Usage text printed on argument errors.
pub const USAGE: &str = "Usage: hcltemplate <templatefile>\n\nThis program \
expects to find valid JSON object data on its stdin, which it will use to \
render the given template.\n\n";

#[derive(Debug, Parser)]
#[command(
    name = "hcltemplate",
    about = "Renders JSON data from stdin through an HCL template."
)]
pub struct Cli {
    /// Template file to render.
    #[arg(value_name = "templatefile")]
    pub template: Option<PathBuf>,

    /// Show version information.
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}

/// Version string of the form `<name> <semver>[-<prerelease>]`.
pub fn version_string() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Parses the process arguments and runs the pipeline, returning the
/// process exit code.
pub fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            let _ = err.print();
            return 0;
        }
        Err(_) => {
            eprint!("{USAGE}");
            return 1;
        }
    };

    if cli.version {
        println!("{}", version_string());
        return 0;
    }

    let Some(template) = cli.template else {
        eprint!("{USAGE}");
        return 1;
    };

    pipeline::run(&template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_single_template_argument() {
        let cli = Cli::try_parse_from(["hcltemplate", "page.tmpl"]).unwrap();
        assert_eq!(cli.template, Some(PathBuf::from("page.tmpl")));
        assert!(!cli.version);
    }

    #[test]
    fn test_version_flag_needs_no_template() {
        for flag in ["-v", "--version"] {
            let cli = Cli::try_parse_from(["hcltemplate", flag]).unwrap();
            assert!(cli.version);
            assert_eq!(cli.template, None);
        }
    }

    #[test]
    fn test_two_positionals_rejected() {
        assert!(Cli::try_parse_from(["hcltemplate", "a.tmpl", "b.tmpl"]).is_err());
    }

    #[test]
    fn test_version_string_shape() {
        let version = version_string();
        assert!(version.starts_with("hcltemplate "));
        assert!(version.split(' ').nth(1).is_some());
    }
}
