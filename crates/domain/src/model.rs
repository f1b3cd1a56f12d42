pub mod placement;
pub mod records;
pub mod report;

pub use placement::{FilePlacement, FolderPlacement};
pub use records::{FileRecord, FolderAggregate, LanguageCount};
pub use report::Report;
