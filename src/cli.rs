use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ChangeSizeError, ChangeSizeResult};
use crate::rewrite::{rewrite_file, RewriteResult, RewriteValues};

/// Printed to stdout when the argument count is wrong
pub const USAGE: &str =
    "This script must be called with three arguments!\nUsage:\n   changesize file newNs newNt";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "changesize",
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Configuration file to rewrite in place
    pub file: PathBuf,

    /// New value for glob_x, glob_y and glob_z
    pub new_xyz: String,

    /// New value for glob_t
    pub new_t: String,
}

impl Cli {
    pub fn values(&self) -> RewriteValues {
        RewriteValues::new(self.new_xyz.clone(), self.new_t.clone())
    }
}

/// Parses the command line, program name included.
///
/// Arguments are opaque: a `--` is placed after the program name so clap reads every
/// following argument (`--help`, `-V`, a second `--`) as a positional value. Anything
/// other than exactly three values is a usage error carrying [`USAGE`].
pub fn parse_args<I, T>(args: I) -> ChangeSizeResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| OsString::from("changesize"));
    let argv = std::iter::once(program)
        .chain(std::iter::once(OsString::from("--")))
        .chain(args);

    Cli::try_parse_from(argv).map_err(|e| {
        debug!("Argument parsing failed: {}", e);
        ChangeSizeError::usage(USAGE)
    })
}

/// Rewrites the file named on the command line
pub fn run(cli: &Cli) -> ChangeSizeResult<RewriteResult> {
    let result = rewrite_file(&cli.file, &cli.values())?;

    for substitution in &result.substitutions {
        info!("{}", substitution);
    }
    for note in &result.notes {
        warn!("{}", note);
    }
    if !result.changes_made {
        info!("No parameters matched in {}", cli.file.display());
    }

    Ok(result)
}
