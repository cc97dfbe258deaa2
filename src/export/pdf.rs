// PDF rendering backend — genpdf consuming the pure page layout.
//
// The document is rendered fully in memory and written in a single call,
// so a construction failure never leaves a partial file behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use genpdf::elements::{Break, PageBreak, Paragraph};
use genpdf::style::Style;
use genpdf::{fonts, Document, Element, SimplePageDecorator};
use tracing::debug;

use crate::backend::models::VerdictRecord;
use crate::export::layout::{paginate, Page, PageMetrics, EXPORT_RECORD_LIMIT};

/// Fixed title on the first page of every export.
pub const DOCUMENT_TITLE: &str = "Verityflow Analysis History";

/// Fixed output filename.
pub const PDF_FILENAME: &str = "verityflow-history.pdf";

/// Directories searched for an embeddable TTF family. genpdf needs real
/// font files; Liberation fonts are commonly available.
const FONT_DIRS: &[&str] = &[
    "./fonts",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/dejavu",
    "/System/Library/Fonts/Supplemental",
    "/Library/Fonts",
];

/// Export at most `EXPORT_RECORD_LIMIT` history records as a PDF in
/// `export_dir`. Returns the written path.
pub fn export_pdf(records: &[VerdictRecord], export_dir: &Path) -> Result<PathBuf> {
    let pages = paginate(records, EXPORT_RECORD_LIMIT, &PageMetrics::default());
    let bytes = render_document(&pages)?;

    let path = export_dir.join(PDF_FILENAME);
    fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(pages = pages.len(), bytes = bytes.len(), "PDF export written");
    Ok(path)
}

/// Render laid-out pages to PDF bytes.
fn render_document(pages: &[Page]) -> Result<Vec<u8>> {
    let font_family = load_font_family()?;

    let mut doc = Document::new(font_family);
    doc.set_title(DOCUMENT_TITLE);
    doc.set_minimal_conformance();

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(14);
    doc.set_page_decorator(decorator);

    doc.push(Paragraph::new(DOCUMENT_TITLE).styled(Style::new().bold().with_font_size(20)));
    doc.push(Break::new(1.0));

    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            doc.push(PageBreak::new());
        }
        for block in &page.blocks {
            doc.push(
                Paragraph::new(block.header.as_str())
                    .styled(Style::new().bold().with_font_size(10)),
            );
            for line in &block.body_lines {
                doc.push(Paragraph::new(line.as_str()).styled(Style::new().with_font_size(10)));
            }
            doc.push(Break::new(1.0));
        }
    }

    let mut bytes = Vec::new();
    doc.render(&mut bytes)
        .map_err(|e| anyhow::anyhow!("PDF rendering failed: {e}"))?;
    Ok(bytes)
}

/// Find and load an embeddable font family from the system.
fn load_font_family() -> Result<fonts::FontFamily<fonts::FontData>> {
    FONT_DIRS
        .iter()
        .map(Path::new)
        .filter(|dir| dir.exists())
        .find_map(|dir| {
            let dir_str = dir.to_str()?;
            fonts::from_files(dir_str, "LiberationSans", None)
                .or_else(|_| fonts::from_files(dir_str, "DejaVuSans", None))
                .ok()
        })
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No embeddable fonts found (searched {FONT_DIRS:?}). \
                 Install the Liberation or DejaVu font family."
            )
        })
}
