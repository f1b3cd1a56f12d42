// crates/core/src/presentation/cli.rs
mod args;

use std::path::PathBuf;

use clap::Parser;
use repo_visualiser_shared_kernel::PresentationError;

use crate::config::RunConfig;

pub use args::Args;

/// Parse CLI arguments and materialise a [`RunConfig`].
pub fn load_config() -> anyhow::Result<RunConfig> {
    build_config(Args::parse())
}

/// Convert parsed CLI arguments into a run configuration.
pub fn build_config(args: Args) -> anyhow::Result<RunConfig> {
    if let Some(blank) = args.ignore.iter().find(|p| p.trim().is_empty()) {
        return Err(PresentationError::InvalidValue {
            flag: "--ignore".to_string(),
            value: blank.clone(),
            reason: "pattern must not be blank".to_string(),
        }
        .into());
    }
    // an empty GITHUB_STEP_SUMMARY means "no summary"
    let summary = args.summary.filter(|p| !p.as_os_str().is_empty());
    let output = args.output.map(|p| if p.as_os_str() == "-" { PathBuf::new() } else { p });
    let stdout = args.stdout || output.as_ref().is_some_and(|p| p.as_os_str().is_empty());
    let output = output.filter(|p| !p.as_os_str().is_empty());

    Ok(RunConfig {
        root: args.path,
        config_file: args.config,
        output,
        summary,
        stdout,
        default_ignores: !args.no_default_ignore,
        ignore: args.ignore,
        respect_gitignore: args.gitignore,
    })
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    fn parse(argv: &[&str]) -> RunConfig {
        let args = Args::try_parse_from(std::iter::once("repo_visualiser").chain(argv.iter().copied())).unwrap();
        build_config(args).unwrap()
    }

    #[test]
    fn defaults() {
        let cfg = parse(&[]);
        assert_eq!(cfg.root, PathBuf::from("."));
        assert!(cfg.default_ignores);
        assert!(!cfg.stdout);
        assert!(cfg.ignore.is_empty());
    }

    #[test]
    fn repeated_ignore_keeps_order() {
        let cfg = parse(&["repo", "--ignore", "docs", "--ignore", "*.md", "--no-default-ignore"]);
        assert_eq!(cfg.root, PathBuf::from("repo"));
        assert_eq!(cfg.ignore, vec!["docs".to_string(), "*.md".to_string()]);
        assert!(!cfg.default_ignores);
    }

    #[test]
    fn dash_output_means_stdout() {
        let cfg = parse(&["-o", "-"]);
        assert!(cfg.stdout);
        assert_eq!(cfg.output, None);
        assert_eq!(cfg.output_path(), None);
    }

    #[test]
    fn empty_ignore_is_rejected() {
        let args = Args::try_parse_from(["repo_visualiser", "--ignore", " "]).unwrap();
        assert!(build_config(args).is_err());
    }

    #[test]
    fn verbosity_nets_out() {
        let args = Args::try_parse_from(["repo_visualiser", "-vv", "-q"]).unwrap();
        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.log_level(), LevelFilter::INFO);
    }

    #[test]
    fn quiet_goes_below_warnings() {
        let level = |argv: &[&str]| Args::try_parse_from(argv).unwrap().log_level();
        assert_eq!(level(&["repo_visualiser"]), LevelFilter::WARN);
        assert_eq!(level(&["repo_visualiser", "-q"]), LevelFilter::ERROR);
        assert_eq!(level(&["repo_visualiser", "-qq"]), LevelFilter::OFF);
        assert_eq!(level(&["repo_visualiser", "-qqq"]), LevelFilter::OFF);
    }
}
