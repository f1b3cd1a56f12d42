use tracing::{debug, trace};

use crate::{config::IgnoreSpec, model::FileRecord};

/// Drops records matched by an ignore specification.
pub struct PathFilter;

impl PathFilter {
    /// Keep the records no pattern in `spec` matches, preserving order.
    pub fn filter<I>(records: I, spec: &IgnoreSpec) -> Vec<FileRecord>
    where
        I: IntoIterator<Item = FileRecord>,
    {
        let mut dropped = 0usize;
        let kept: Vec<FileRecord> = records
            .into_iter()
            .filter(|record| match spec.first_match(&record.path) {
                Some(pattern) => {
                    trace!(path = %record.path, %pattern, "ignored");
                    dropped += 1;
                    false
                }
                None => true,
            })
            .collect();
        debug!(kept = kept.len(), dropped, patterns = spec.len(), "applied ignore spec");
        kept
    }
}
