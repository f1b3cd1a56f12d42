use repo_visualiser_shared_kernel::{DomainError, DomainResult, LineCount};
use serde::{Deserialize, Serialize};

/// Tunable geometry of the diagram.
///
/// Every value has a default, so configuration files only need to name the
/// fields they override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Vertical offset of the first row, leaving room for folder labels.
    pub start_y: f64,
    /// Vertical gap between rows.
    pub row_margin: f64,
    /// Lines of code per unit of radius.
    pub lines_per_unit: f64,
    pub folder_radius_base: f64,
    pub folder_radius_floor: f64,
    pub file_radius_base: f64,
    pub file_radius_floor: f64,
    /// How far file centres are pulled in from the folder boundary.
    pub file_inset: f64,
    pub min_file_distance: f64,
    /// File circles smaller than this get no label.
    pub label_threshold: f64,
    pub folder_label_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            start_y: 100.0,
            row_margin: 10.0,
            lines_per_unit: 10.0,
            folder_radius_base: 20.0,
            folder_radius_floor: 10.0,
            file_radius_base: 5.0,
            file_radius_floor: 2.0,
            file_inset: 25.0,
            min_file_distance: 5.0,
            label_threshold: 15.0,
            folder_label_offset: 5.0,
        }
    }
}

impl LayoutConfig {
    pub fn folder_radius(&self, total: LineCount) -> f64 {
        (total.as_f64() / self.lines_per_unit + self.folder_radius_base).max(self.folder_radius_floor)
    }

    pub fn file_radius(&self, lines: LineCount) -> f64 {
        (lines.as_f64() / self.lines_per_unit + self.file_radius_base).max(self.file_radius_floor)
    }

    /// Distance of file centres from their folder's centre.
    pub fn file_distance(&self, folder_radius: f64) -> f64 {
        (folder_radius - self.file_inset).max(self.min_file_distance)
    }

    /// Reject settings that would produce zero-size or inverted geometry.
    pub fn validate(&self) -> DomainResult<()> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("lines_per_unit", self.lines_per_unit),
            ("folder_radius_floor", self.folder_radius_floor),
            ("file_radius_floor", self.file_radius_floor),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, "must be a positive number"));
            }
        }
        let non_negative = [
            ("start_y", self.start_y),
            ("row_margin", self.row_margin),
            ("folder_radius_base", self.folder_radius_base),
            ("file_radius_base", self.file_radius_base),
            ("file_inset", self.file_inset),
            ("min_file_distance", self.min_file_distance),
            ("label_threshold", self.label_threshold),
            ("folder_label_offset", self.folder_label_offset),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, "must not be negative"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> DomainError {
    DomainError::InvalidLayout { field: field.to_string(), reason: reason.to_string() }
}
