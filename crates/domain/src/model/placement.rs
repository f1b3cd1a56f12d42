use serde::Serialize;

use super::records::{FileRecord, FolderAggregate};

/// A folder circle positioned on the canvas together with its files.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderPlacement {
    pub aggregate: FolderAggregate,
    pub center_x: f64,
    pub center_y: f64,
    pub files: Vec<FilePlacement>,
}

impl FolderPlacement {
    pub fn radius(&self) -> f64 {
        self.aggregate.radius
    }

    pub fn left(&self) -> f64 {
        self.center_x - self.aggregate.radius
    }

    pub fn right(&self) -> f64 {
        self.center_x + self.aggregate.radius
    }

    pub fn top(&self) -> f64 {
        self.center_y - self.aggregate.radius
    }

    pub fn bottom(&self) -> f64 {
        self.center_y + self.aggregate.radius
    }
}

/// A file circle positioned on the ring inside its folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilePlacement {
    pub record: FileRecord,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub color: String,
}
