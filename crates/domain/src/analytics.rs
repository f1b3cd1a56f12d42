pub mod aggregate;
pub mod tally;

pub use aggregate::FolderAggregator;
pub use tally::LanguageTally;
