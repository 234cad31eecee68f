//! PDF document assembly via [`printpdf`].
//!
//! A4 portrait pages, builtin Helvetica fonts, top-down text cursor with
//! automatic page breaks. Layout stays deliberately plain; the content is
//! the point, not the typesetting.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};
use tracing::info;

use duration_core::error::{AnalyzerError, Result};
use duration_core::formatting::format_mean;
use duration_core::models::MonthlyTable;

use crate::narrative;

/// File name used when the caller gives no explicit destination.
pub const DEFAULT_REPORT_NAME: &str = "Step_Duration_Report.pdf";

// A4 portrait.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 6.0;

// ── Public API ────────────────────────────────────────────────────────────────

/// Build the summary report from `table` and write it to `path`.
///
/// Parent directories are created as needed. Returns the path the file was
/// written to. I/O failures map to [`AnalyzerError::ReportWrite`]; PDF
/// assembly failures to [`AnalyzerError::Pdf`].
pub fn write_report(table: &MonthlyTable, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| AnalyzerError::ReportWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let doc = build_document(table)?;

    let file = File::create(path).map_err(|source| AnalyzerError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AnalyzerError::Pdf(e.to_string()))?;

    info!("Report written to {}", path.display());
    Ok(path.to_path_buf())
}

// ── Document assembly ─────────────────────────────────────────────────────────

/// Cursor that writes top-down and opens a fresh page when the current one
/// runs out.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        }
    }

    /// Reserve `height` millimetres, breaking to a new page if necessary.
    fn advance(&mut self, height: f32) {
        if self.y - height < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        self.y -= height;
    }

    fn text(&mut self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.advance(LINE_HEIGHT_MM * (size / 11.0));
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn gap(&mut self, height: f32) {
        self.advance(height);
    }

    /// Horizontal rule across the text width at the current position.
    fn rule(&mut self) {
        self.advance(2.0);
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(self.y)), false),
                (
                    Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(self.y)),
                    false,
                ),
            ],
            is_closed: false,
        };
        self.layer.set_outline_thickness(0.4);
        self.layer.add_line(line);
    }
}

/// Assemble the full document in memory.
fn build_document(table: &MonthlyTable) -> Result<PdfDocumentReference> {
    let (doc, page, layer) = PdfDocument::new(
        "Step Duration Analysis Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AnalyzerError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AnalyzerError::Pdf(e.to_string()))?;

    let first_layer = doc.get_page(page).get_layer(layer);
    let mut writer = PageWriter::new(&doc, first_layer);

    // ── Title ─────────────────────────────────────────────────────────────────
    writer.text("Step Duration Analysis Report", 18.0, MARGIN_MM, &bold);
    writer.rule();
    writer.gap(6.0);

    // ── Monthly analysis ──────────────────────────────────────────────────────
    writer.text("Monthly Analysis", 14.0, MARGIN_MM, &bold);
    writer.gap(2.0);
    for (heading, lines) in narrative::monthly_analysis(table) {
        writer.text(&format!("{}:", heading), 11.0, MARGIN_MM, &bold);
        for line in lines {
            writer.text(&line, 11.0, MARGIN_MM + 4.0, &font);
        }
        writer.gap(3.0);
    }

    // ── Summary table ─────────────────────────────────────────────────────────
    writer.gap(4.0);
    writer.text(
        "Average Step Durations (minutes)",
        14.0,
        MARGIN_MM,
        &bold,
    );
    writer.gap(2.0);
    render_table(&mut writer, table, &font, &bold);

    // ── Conclusion ────────────────────────────────────────────────────────────
    writer.gap(6.0);
    writer.text("Conclusion", 14.0, MARGIN_MM, &bold);
    writer.gap(2.0);
    for line in narrative::conclusion(table) {
        writer.text(&line, 11.0, MARGIN_MM + 4.0, &font);
    }

    Ok(doc)
}

/// Month column plus one column per duration, evenly spaced across the text
/// width.
fn render_table(
    writer: &mut PageWriter<'_>,
    table: &MonthlyTable,
    font: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    let text_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    let column_count = table.duration_columns.len() + 1;
    let column_width = text_width / column_count as f32;
    let x_at = |col: usize| MARGIN_MM + column_width * col as f32;

    // Header row.
    writer.advance(LINE_HEIGHT_MM);
    let y = writer.y;
    writer.layer.use_text("Month", 10.0, Mm(x_at(0)), Mm(y), bold);
    for (i, name) in table.duration_columns.iter().enumerate() {
        writer
            .layer
            .use_text(name.as_str(), 10.0, Mm(x_at(i + 1)), Mm(y), bold);
    }
    writer.rule();

    // Data rows.
    for row in &table.rows {
        writer.advance(LINE_HEIGHT_MM);
        let y = writer.y;
        writer
            .layer
            .use_text(row.month.as_str(), 10.0, Mm(x_at(0)), Mm(y), font);
        for (i, mean) in row.means.iter().enumerate() {
            writer
                .layer
                .use_text(format_mean(*mean), 10.0, Mm(x_at(i + 1)), Mm(y), font);
        }
    }
    writer.rule();
}

// ── Tests ─────────────────────────────────────────────────────────────────────
