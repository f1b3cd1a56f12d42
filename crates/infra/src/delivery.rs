// crates/infra/src/delivery.rs
//! Sinks that put a finished [`Report`] somewhere.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use repo_visualiser_domain::{Report, embed_svg, language_table};
use repo_visualiser_ports::delivery::DiagramSink;
use repo_visualiser_shared_kernel::{InfrastructureError, Result};
use tracing::info;

use crate::persistence::FileWriter;

/// Writes the SVG document to a file, replacing it atomically.
#[derive(Debug, Clone)]
pub struct SvgFileSink {
    path: PathBuf,
}

impl SvgFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiagramSink for SvgFileSink {
    fn name(&self) -> &str {
        "svg-file"
    }

    fn deliver(&self, report: &Report) -> Result<()> {
        FileWriter::atomic_write(&self.path, report.svg.as_bytes())?;
        info!(path = %self.path.display(), "wrote diagram");
        Ok(())
    }
}

/// Appends the embedded diagram and the language table to a Markdown
/// run-summary file (e.g. `$GITHUB_STEP_SUMMARY`).
#[derive(Debug, Clone)]
pub struct StepSummarySink {
    path: PathBuf,
}

impl StepSummarySink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The Markdown block appended for `report`.
    pub fn render(report: &Report) -> String {
        format!("{}\n{}\n", embed_svg(&report.svg), language_table(&report.languages))
    }
}

impl DiagramSink for StepSummarySink {
    fn name(&self) -> &str {
        "step-summary"
    }

    fn deliver(&self, report: &Report) -> Result<()> {
        FileWriter::append(&self.path, Self::render(report).as_bytes())?;
        info!(path = %self.path.display(), "appended run summary");
        Ok(())
    }
}

/// Prints the SVG document to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagramSink for StdoutSink {
    fn name(&self) -> &str {
        "stdout"
    }

    fn deliver(&self, report: &Report) -> Result<()> {
        let write = || -> std::io::Result<()> {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{}", report.svg)?;
            out.flush()
        };
        write().map_err(|source| InfrastructureError::OutputError {
            message: "writing diagram to stdout".to_string(),
            source: Some(Box::new(source)),
        })?;
        Ok(())
    }
}
