// crates/core/src/presentation/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use tracing::level_filters::LevelFilter;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "repo_visualiser",
    version = crate::VERSION,
    about = "Render a source tree as nested circles sized by line count"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Root of the tree to visualise
    #[arg(value_hint = ValueHint::DirPath, default_value = ".")]
    pub path: PathBuf,

    /// Config file (JSON, or YAML by extension); defaults to a well-known file in PATH
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub config: Option<PathBuf>,

    /// Additional ignore pattern (glob or path prefix); may be repeated
    #[arg(long = "ignore", value_name = "PATTERN", help_heading = "Input")]
    pub ignore: Vec<String>,

    /// Do not prepend the built-in ignore list
    #[arg(long, help_heading = "Input")]
    pub no_default_ignore: bool,

    /// Honour .gitignore and .ignore files during traversal
    #[arg(long, help_heading = "Input")]
    pub gitignore: bool,

    /// Where to write the SVG diagram [default: diagram.svg]
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Markdown summary file to append the diagram and language table to
    #[arg(long, env = "GITHUB_STEP_SUMMARY", value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub summary: Option<PathBuf>,

    /// Print the SVG to stdout (no diagram.svg unless --output is given)
    #[arg(long, help_heading = "Output")]
    pub stdout: bool,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Less log output (-q errors only, -qq silent)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

impl Args {
    /// Net verbosity: 0 is warnings only, negative is quieter.
    pub fn verbosity(&self) -> i16 {
        i16::from(self.verbose) - i16::from(self.quiet)
    }

    /// Log level implied by `-v`/`-q`.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            ..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
