// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod file_info;
pub mod language;

pub use counts::LineCount;
pub use file_info::FilePath;
pub use language::Language;
