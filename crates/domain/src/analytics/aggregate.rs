use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    config::LayoutConfig,
    model::{FileRecord, FolderAggregate},
};

/// Groups file records by their parent directory.
pub struct FolderAggregator;

impl FolderAggregator {
    /// One aggregate per distinct parent directory, ordered by folder path.
    ///
    /// Files keep their input order within a folder.
    pub fn aggregate<I>(records: I, layout: &LayoutConfig) -> Vec<FolderAggregate>
    where
        I: IntoIterator<Item = FileRecord>,
    {
        let mut groups: BTreeMap<String, Vec<FileRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(record.path.parent_dir().to_string()).or_default().push(record);
        }
        let folders: Vec<FolderAggregate> = groups
            .into_iter()
            .map(|(folder, files)| FolderAggregate::new(folder, files, layout))
            .collect();
        debug!(folders = folders.len(), "aggregated folders");
        folders
    }
}
