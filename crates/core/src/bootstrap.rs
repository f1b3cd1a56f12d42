// crates/core/src/bootstrap.rs
use anyhow::{Context, Result};
use repo_visualiser_domain::{ColorPalette, Report};
use repo_visualiser_infra::{
    ConfigFile, ExtensionClassifier, StdoutSink, StepSummarySink, SvgFileSink, WalkFileSource,
};
use repo_visualiser_ports::{
    config::{IgnoreSpecSource, StaticIgnoreSpec},
    delivery::DiagramSink,
};
use repo_visualiser_usecase::{VisualiseOptions, VisualiseRepository};
use tracing::{info, warn};

use crate::{config::RunConfig, presentation::cli};

pub fn run() -> Result<Report> {
    let config = cli::load_config()?;
    run_with_config(&config)
}

/// Visualise `config.root` and hand the result to every configured sink.
pub fn run_with_config(config: &RunConfig) -> Result<Report> {
    let file = load_config_file(config);

    let mut palette = ColorPalette::default();
    palette.merge(file.colors.clone());
    let options =
        VisualiseOptions { layout: file.layout.clone(), palette, default_ignores: config.default_ignores };

    // config-file patterns first, then --ignore
    let cli_ignores = StaticIgnoreSpec::new(config.ignore.clone());
    let ignore_sources: [&dyn IgnoreSpecSource; 2] = [&file, &cli_ignores];

    let source = WalkFileSource::new(ExtensionClassifier::new());
    let usecase = VisualiseRepository::new(&source, &ignore_sources);
    let report = usecase
        .run(&config.source_plan(), &options)
        .with_context(|| format!("visualising {}", config.root.display()))?;
    info!(
        folders = report.folders,
        files = report.files,
        ignored = report.ignored,
        languages = report.languages.len(),
        "diagram ready"
    );

    let svg_sink = config.output_path().map(SvgFileSink::new);
    let summary_sink = config.summary.as_ref().map(StepSummarySink::new);
    let stdout_sink = config.stdout.then_some(StdoutSink);

    let mut sinks: Vec<&dyn DiagramSink> = Vec::new();
    if let Some(sink) = &svg_sink {
        sinks.push(sink);
    }
    if let Some(sink) = &summary_sink {
        sinks.push(sink);
    }
    if let Some(sink) = &stdout_sink {
        sinks.push(sink);
    }
    VisualiseRepository::deliver(&report, &sinks).context("delivering diagram")?;

    Ok(report)
}

/// Config file contents, or defaults when the file cannot be loaded.
fn load_config_file(config: &RunConfig) -> ConfigFile {
    let loader = config.config_loader();
    match loader.load() {
        Ok(file) => file,
        Err(err) => {
            warn!("could not load configuration, using defaults: {err}");
            ConfigFile::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn writes_svg_and_summary() {
        let repo = tempfile::tempdir().unwrap();
        write(repo.path(), "a/x.go", &"x\n".repeat(99));
        write(repo.path(), "b/z.py", "print()\n");
        let out = tempfile::tempdir().unwrap();
        let config = RunConfig {
            root: repo.path().to_path_buf(),
            output: Some(out.path().join("diagram.svg")),
            summary: Some(out.path().join("summary.md")),
            ..RunConfig::default()
        };

        let report = run_with_config(&config).unwrap();
        assert_eq!(report.folders, 2);
        assert_eq!(report.files, 2);

        let svg = fs::read_to_string(out.path().join("diagram.svg")).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("lightblue"));
        let summary = fs::read_to_string(out.path().join("summary.md")).unwrap();
        assert!(summary.contains("| Files   |"));
    }

    #[test]
    fn broken_config_file_degrades_to_defaults() {
        let repo = tempfile::tempdir().unwrap();
        write(repo.path(), "ignore.json", "{ not json");
        write(repo.path(), "src/lib.rs", "pub fn f() {}\n");
        let out = tempfile::tempdir().unwrap();
        let config = RunConfig {
            root: repo.path().to_path_buf(),
            output: Some(out.path().join("d.svg")),
            ..RunConfig::default()
        };
        let report = run_with_config(&config).unwrap();
        // ignore.json itself is counted alongside src/lib.rs
        assert_eq!(report.files, 2);
    }

    #[test]
    fn config_file_ignores_and_colors_apply() {
        let repo = tempfile::tempdir().unwrap();
        write(
            repo.path(),
            ".repo-visualiser.json",
            r#"{"ignore": ["docs", ".repo-visualiser.json"], "colors": {"Rust": "crimson"}}"#,
        );
        write(repo.path(), "docs/guide.rs", "x\n");
        write(repo.path(), "src/main.rs", "fn main() {}\n");
        let out = tempfile::tempdir().unwrap();
        let config = RunConfig {
            root: repo.path().to_path_buf(),
            output: Some(out.path().join("d.svg")),
            ..RunConfig::default()
        };
        let report = run_with_config(&config).unwrap();
        assert_eq!(report.files, 1);
        assert_eq!(report.ignored, 2);
        assert!(report.svg.contains("crimson"));
        assert!(report.svg.contains(">src</text>"));
        assert!(!report.svg.contains(">docs</text>"));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig { root: dir.path().join("absent"), stdout: true, ..RunConfig::default() };
        let err = run_with_config(&config).unwrap_err();
        assert!(format!("{err:#}").contains("does not exist"));
    }
}
