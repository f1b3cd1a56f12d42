//! Row-based circle packing.
//!
//! Folder circles are laid left to right, edge to edge, and wrap to a new
//! row when the next circle would cross the canvas width. The next row
//! starts below the tallest circle of the previous one plus a margin, so
//! folder circles never overlap. Files sit on a ring inside their folder at
//! evenly spaced angles; file circles may overlap each other.

use tracing::debug;

use crate::{
    config::{ColorPalette, LayoutConfig},
    model::{FilePlacement, FolderAggregate, FolderPlacement},
};

/// Greedy O(n) placement of folder and file circles.
pub struct CirclePacker<'a> {
    layout: &'a LayoutConfig,
    palette: &'a ColorPalette,
}

/// Position of the next folder circle.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    x: f64,
    y: f64,
    row_height: f64,
}

impl Cursor {
    fn new(start_y: f64) -> Self {
        Self { x: 0.0, y: start_y, row_height: 0.0 }
    }

    /// Reserve a square of side `diameter`, wrapping first if it does not fit.
    ///
    /// A circle wider than the canvas is placed alone at the start of a row
    /// rather than wrapping into an empty row.
    fn place(&mut self, diameter: f64, width: f64, margin: f64) -> (f64, f64) {
        if self.x > 0.0 && self.x + diameter > width {
            self.x = 0.0;
            self.y += self.row_height + margin;
            self.row_height = 0.0;
        }
        let origin = (self.x, self.y);
        self.row_height = self.row_height.max(diameter);
        self.x += diameter;
        origin
    }
}

impl<'a> CirclePacker<'a> {
    pub fn new(layout: &'a LayoutConfig, palette: &'a ColorPalette) -> Self {
        Self { layout, palette }
    }

    /// Place `aggregates` in the order given.
    pub fn pack(&self, aggregates: Vec<FolderAggregate>) -> Vec<FolderPlacement> {
        let mut cursor = Cursor::new(self.layout.start_y);
        let placements: Vec<FolderPlacement> = aggregates
            .into_iter()
            .map(|aggregate| {
                let radius = aggregate.radius;
                let (x, y) = cursor.place(aggregate.diameter(), self.layout.canvas_width, self.layout.row_margin);
                let (center_x, center_y) = (x + radius, y + radius);
                let files = self.place_files(&aggregate, center_x, center_y);
                FolderPlacement { aggregate, center_x, center_y, files }
            })
            .collect();
        debug!(folders = placements.len(), bottom = cursor.y + cursor.row_height, "packed folders");
        placements
    }

    fn place_files(&self, folder: &FolderAggregate, center_x: f64, center_y: f64) -> Vec<FilePlacement> {
        #[allow(clippy::cast_precision_loss)]
        let step = 360.0 / (folder.files.len().max(1) as f64);
        let distance = self.layout.file_distance(folder.radius);

        folder
            .files
            .iter()
            .enumerate()
            .map(|(i, record)| {
                #[allow(clippy::cast_precision_loss)]
                let angle = (i as f64 * step).to_radians();
                FilePlacement {
                    record: record.clone(),
                    center_x: center_x + distance * angle.cos(),
                    center_y: center_y + distance * angle.sin(),
                    radius: self.layout.file_radius(record.lines),
                    color: self.palette.color_for(&record.language).to_string(),
                }
            })
            .collect()
    }
}
