//! Minimal PDF writer.
//!
//! Produces a PDF 1.3 document using the built-in Helvetica font, so no font
//! data is embedded. Text is encoded through an [`EncoderChain`], wrapped with
//! Helvetica metrics and laid out one row per line on A4 pages.
//!
//! The output carries no timestamps or random identifiers: the same text
//! always produces byte-identical files.

use std::io::Write;

use storyweaver_core::{
    application::ports::StoryExporter,
    domain::{ExportFormat, strip_emphasis},
    error::WeaverResult,
};
use tracing::{debug, instrument};

use super::{encoding::EncoderChain, metrics::text_width};

/// Page geometry, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub bottom_margin: f32,
    pub row_height: f32,
    /// Horizontal padding inside each row.
    pub padding: f32,
    pub font_size: f32,
}

impl PageLayout {
    /// A4 with 1 cm margins, 2 cm bottom margin and 1 cm rows at 12 pt.
    pub const A4: PageLayout = PageLayout {
        width: 595.28,
        height: 841.89,
        margin: 28.35,
        bottom_margin: 56.69,
        row_height: 28.35,
        padding: 2.835,
        font_size: 12.0,
    };

    /// Width available to text on one row.
    pub fn text_width(&self) -> f32 {
        self.width - 2.0 * self.margin - 2.0 * self.padding
    }

    /// Rows that fit on one page.
    pub fn rows_per_page(&self) -> usize {
        let usable = self.height - self.margin - self.bottom_margin;
        ((usable / self.row_height).floor() as usize).max(1)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::A4
    }
}

/// Exports stories as single-font PDF documents.
#[derive(Debug, Clone, Default)]
pub struct PdfExporter {
    chain: EncoderChain,
    layout: PageLayout,
}

impl PdfExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chain(mut self, chain: EncoderChain) -> Self {
        self.chain = chain;
        self
    }

    /// Encoded, wrapped rows for `text`, one blank row per empty line.
    pub fn rows(&self, text: &str) -> WeaverResult<Vec<Vec<u8>>> {
        let clean = strip_emphasis(text);
        let mut rows = Vec::new();
        for line in clean.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line).replace('\t', "    ");
            let encoded = self.chain.encode(&line)?;
            rows.extend(wrap(&encoded, self.layout.text_width(), self.layout.font_size));
        }
        Ok(rows)
    }

    #[instrument(skip_all, fields(chars = text.chars().count()))]
    pub fn render(&self, text: &str) -> WeaverResult<Vec<u8>> {
        let rows = self.rows(text)?;
        let title = first_line(&rows);

        // `rows` always holds at least one row, so there is at least one page.
        let pages: Vec<&[Vec<u8>]> = rows.chunks(self.layout.rows_per_page()).collect();

        let mut doc = Document::default();
        let page_count = pages.len();
        // 1 catalog, 2 page tree, 3 font, 4 info; then a page and its content per page.
        let page_ids: Vec<usize> = (0..page_count).map(|i| 5 + 2 * i).collect();

        doc.object(b"<< /Type /Catalog /Pages 2 0 R >>");
        let kids: Vec<String> = page_ids.iter().map(|id| format!("{id} 0 R")).collect();
        doc.object(
            format!(
                "<< /Type /Pages /Kids [{}] /Count {page_count} >>",
                kids.join(" ")
            )
            .as_bytes(),
        );
        doc.object(
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        );
        let mut info = b"<< /Producer (Story Weaver) /Title (".to_vec();
        info.extend(escape(title));
        info.extend_from_slice(b") >>");
        doc.object(&info);

        for (index, page_rows) in pages.iter().enumerate() {
            let content = self.page_content(page_rows);
            let content_id = page_ids[index] + 1;
            let l = &self.layout;
            doc.object(
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                     /Resources << /Font << /F1 3 0 R >> >> /Contents {content_id} 0 R >>",
                    l.width, l.height
                )
                .as_bytes(),
            );
            doc.stream(&content);
        }

        let bytes = doc.finish(4);
        debug!(pages = page_count, rows = rows.len(), bytes = bytes.len(), "PDF written");
        Ok(bytes)
    }

    fn page_content(&self, rows: &[Vec<u8>]) -> Vec<u8> {
        let l = &self.layout;
        let mut content = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            if row.is_empty() {
                continue;
            }
            let top = l.margin + index as f32 * l.row_height;
            let baseline = l.height - (top + 0.5 * l.row_height + 0.3 * l.font_size);
            let x = l.margin + l.padding;
            // Writing into a Vec cannot fail.
            let _ = write!(
                content,
                "BT /F1 {:.2} Tf {x:.2} {baseline:.2} Td (",
                l.font_size
            );
            content.extend(escape(row));
            content.extend_from_slice(b") Tj ET\n");
        }
        content
    }
}

impl StoryExporter for PdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn export(&self, text: &str) -> WeaverResult<Vec<u8>> {
        self.render(text)
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Break one encoded line into rows no wider than `max_width`.
///
/// Breaks at the last space that fits; a word wider than the row is split
/// mid-word. An empty line yields one empty row.
fn wrap(line: &[u8], max_width: f32, font_size: f32) -> Vec<Vec<u8>> {
    let mut rows = Vec::new();
    let mut start = 0;

    while start < line.len() {
        let mut end = start;
        let mut last_space = None;
        while end < line.len() && text_width(&line[start..=end], font_size) <= max_width {
            if line[end] == b' ' {
                last_space = Some(end);
            }
            end += 1;
        }
        if end < line.len() && line[end] == b' ' {
            last_space = Some(end);
        }

        if end == line.len() {
            rows.push(line[start..].to_vec());
            break;
        }

        match last_space {
            Some(space) if space > start => {
                rows.push(line[start..space].to_vec());
                start = space + 1;
            }
            _ => {
                // Always make progress, even if one glyph is wider than the row.
                let end = end.max(start + 1);
                rows.push(line[start..end].to_vec());
                start = end;
            }
        }
    }

    if rows.is_empty() {
        rows.push(Vec::new());
    }
    rows
}

fn first_line(rows: &[Vec<u8>]) -> &[u8] {
    rows.iter()
        .find(|row| !row.is_empty())
        .map(Vec::as_slice)
        .unwrap_or(b"Story")
}

fn escape(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &b in bytes {
        if matches!(b, b'\\' | b'(' | b')') {
            out.push(b'\\');
        }
        out.push(b);
    }
    out
}

// ── Serialization ─────────────────────────────────────────────────────────────

/// Numbered indirect objects with their byte offsets.
struct Document {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl Default for Document {
    fn default() -> Self {
        let mut buf = b"%PDF-1.3\n".to_vec();
        buf.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }
}

impl Document {
    fn begin(&mut self) {
        self.offsets.push(self.buf.len());
        let id = self.offsets.len();
        self.buf.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
    }

    fn object(&mut self, body: &[u8]) {
        self.begin();
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    fn stream(&mut self, data: &[u8]) {
        self.begin();
        self.buf
            .extend_from_slice(format!("<< /Length {} >>\nstream\n", data.len()).as_bytes());
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\nendstream\nendobj\n");
    }

    fn finish(mut self, info_id: usize) -> Vec<u8> {
        let xref = self.buf.len();
        let size = self.offsets.len() + 1;
        self.buf
            .extend_from_slice(format!("xref\n0 {size}\n0000000000 65535 f \n").as_bytes());
        for offset in &self.offsets {
            self.buf
                .extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        self.buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {size} /Root 1 0 R /Info {info_id} 0 R >>\n\
                 startxref\n{xref}\n%%EOF\n"
            )
            .as_bytes(),
        );
        self.buf
    }
}
