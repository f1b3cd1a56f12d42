// crates/ports/src/delivery.rs
use repo_visualiser_domain::Report;
use repo_visualiser_shared_kernel::Result;

/// Port consuming a finished report (file, run summary, stdout...).
pub trait DiagramSink {
    fn name(&self) -> &str;
    fn deliver(&self, report: &Report) -> Result<()>;
}
