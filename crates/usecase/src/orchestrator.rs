use repo_visualiser_domain::{
    CirclePacker, DiagramRenderer, FileRecord, FolderAggregator, IgnoreSpec, LanguageTally, PathFilter, Report,
};
use repo_visualiser_ports::{
    config::IgnoreSpecSource,
    delivery::DiagramSink,
    filesystem::{FileSource, SourcePlan},
};
use repo_visualiser_shared_kernel::{ApplicationError, Result};
use tracing::{debug, info, warn};

use crate::dto::VisualiseOptions;

pub struct VisualiseRepository<'a> {
    source: &'a dyn FileSource,
    ignore: &'a [&'a dyn IgnoreSpecSource],
}

impl<'a> VisualiseRepository<'a> {
    pub fn new(source: &'a dyn FileSource, ignore: &'a [&'a dyn IgnoreSpecSource]) -> Self {
        Self { source, ignore }
    }

    pub fn run(&self, plan: &SourcePlan, options: &VisualiseOptions) -> Result<Report> {
        let records = self.source.collect(plan).map_err(|e| ApplicationError::CollectionFailed {
            reason: format!("traversal of '{}' failed", plan.root.display()),
            source: Some(Box::new(e)),
        })?;
        info!(files = records.len(), root = %plan.root.display(), "collected source files");
        Ok(self.visualise(records, options))
    }

    /// Run the pure part of the pipeline over already collected records.
    pub fn visualise(&self, records: Vec<FileRecord>, options: &VisualiseOptions) -> Report {
        // languages are tallied before ignore filtering
        let languages = LanguageTally::tally(&records);

        let spec = self.ignore_spec(options.default_ignores);
        let total = records.len();
        let kept = PathFilter::filter(records, &spec);
        let ignored = total - kept.len();
        let files = kept.len();

        let folders = FolderAggregator::aggregate(kept, &options.layout);
        let folder_count = folders.len();
        let placements = CirclePacker::new(&options.layout, &options.palette).pack(folders);
        let svg = DiagramRenderer::new(&options.layout).render(&placements);
        debug!(bytes = svg.len(), "rendered diagram");

        Report { svg, languages, folders: folder_count, files, ignored }
    }

    /// Hand `report` to every sink, stopping at the first failure.
    pub fn deliver(report: &Report, sinks: &[&dyn DiagramSink]) -> Result<()> {
        for sink in sinks {
            sink.deliver(report).map_err(|e| ApplicationError::DeliveryFailed {
                sink: sink.name().to_string(),
                reason: "sink returned an error".to_string(),
                source: Some(Box::new(e)),
            })?;
            debug!(sink = sink.name(), "delivered report");
        }
        Ok(())
    }

    fn ignore_spec(&self, default_ignores: bool) -> IgnoreSpec {
        let mut spec = if default_ignores { IgnoreSpec::defaults() } else { IgnoreSpec::empty() };
        for source in self.ignore {
            match source.load_ignore_spec() {
                Ok(loaded) => spec.extend(loaded.patterns().iter().map(|p| p.as_str().to_string())),
                Err(err) => warn!("could not load ignore patterns, continuing without them: {err}"),
            }
        }
        spec
    }
}
