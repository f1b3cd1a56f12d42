use std::fmt::Write;

use repo_visualiser_shared_kernel::value_objects::file_info::base_name;

use crate::{
    config::LayoutConfig,
    model::{FilePlacement, FolderPlacement},
};

/// Serialises placed circles into a standalone SVG document.
pub struct DiagramRenderer<'a> {
    layout: &'a LayoutConfig,
}

impl<'a> DiagramRenderer<'a> {
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self { layout }
    }

    pub fn render(&self, placements: &[FolderPlacement]) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_document(&mut out, placements);
        out
    }

    fn write_document(&self, out: &mut String, placements: &[FolderPlacement]) -> std::fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.layout.canvas_width, self.layout.canvas_height
        )?;
        for folder in placements {
            self.write_folder(out, folder)?;
            for file in &folder.files {
                self.write_file(out, file)?;
            }
        }
        writeln!(out, "</svg>")
    }

    fn write_folder(&self, out: &mut String, folder: &FolderPlacement) -> std::fmt::Result {
        writeln!(
            out,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="black" stroke-width="2" />"#,
            folder.center_x,
            folder.center_y,
            folder.radius()
        )?;
        writeln!(
            out,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" alignment-baseline="baseline" font-size="12">{}</text>"#,
            folder.center_x,
            folder.top() - self.layout.folder_label_offset,
            escape(base_name(&folder.aggregate.folder))
        )
    }

    fn write_file(&self, out: &mut String, file: &FilePlacement) -> std::fmt::Result {
        writeln!(
            out,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" />"#,
            file.center_x,
            file.center_y,
            file.radius,
            escape(&file.color)
        )?;
        if file.radius >= self.layout.label_threshold {
            writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" alignment-baseline="middle" font-size="8">{}</text>"#,
                file.center_x,
                file.center_y,
                escape(file.record.path.file_name())
            )?;
        }
        Ok(())
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
