// Pure pagination for the history document.
//
// A running vertical cursor walks down the page; when it would pass the
// bottom threshold before a record's block is written, the block moves to
// a fresh page. No rendering library is involved here, which keeps the
// page-break and truncation rules testable on their own.

use crate::backend::models::VerdictRecord;
use crate::output::truncate_chars;
use crate::render::format_confidence;

/// At most this many records go into one exported document.
pub const EXPORT_RECORD_LIMIT: usize = 20;

/// Message bodies are cut to this many characters (plus an ellipsis
/// marker) in the document.
pub const MESSAGE_PREVIEW_CHARS: usize = 100;

/// Fixed page geometry, in the same units the rendering backend uses.
#[derive(Debug, Clone)]
pub struct PageMetrics {
    /// Cursor position where the first record starts, below the title.
    pub start_cursor: f64,
    /// Cursor reset position on continuation pages.
    pub top_margin: f64,
    /// A record whose block would start past this line goes to a new page.
    pub page_bottom: f64,
    /// Vertical advance after the bold header line.
    pub header_advance: f64,
    /// Vertical advance per wrapped body line.
    pub line_height: f64,
    /// Extra gap between records.
    pub record_gap: f64,
    /// Character width the message body wraps to.
    pub wrap_chars: usize,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self {
            start_cursor: 35.0,
            top_margin: 20.0,
            page_bottom: 270.0,
            header_advance: 6.0,
            line_height: 5.0,
            record_gap: 8.0,
            wrap_chars: 90,
        }
    }
}

/// One record's block in the document: a bold header line plus the
/// wrapped, truncated message body.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBlock {
    /// 1-based position in the exported sequence.
    pub index: usize,
    pub header: String,
    pub body_lines: Vec<String>,
}

/// One page of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub blocks: Vec<RecordBlock>,
}

/// Lay out at most `limit` records, in their existing order, into pages.
pub fn paginate(records: &[VerdictRecord], limit: usize, metrics: &PageMetrics) -> Vec<Page> {
    let mut pages: Vec<Page> = Vec::new();
    let mut current = Page {
        number: 1,
        blocks: Vec::new(),
    };
    let mut cursor = metrics.start_cursor;

    for (i, record) in records.iter().take(limit).enumerate() {
        if cursor > metrics.page_bottom {
            let number = current.number;
            pages.push(current);
            current = Page {
                number: number + 1,
                blocks: Vec::new(),
            };
            cursor = metrics.top_margin;
        }

        let header = format!(
            "{}. {} ({})",
            i + 1,
            record.verdict,
            format_confidence(record.confidence)
        );
        cursor += metrics.header_advance;

        let body = truncate_chars(&record.message, MESSAGE_PREVIEW_CHARS);
        let body_lines = wrap_text(&body, metrics.wrap_chars);
        cursor += body_lines.len() as f64 * metrics.line_height + metrics.record_gap;

        current.blocks.push(RecordBlock {
            index: i + 1,
            header,
            body_lines,
        });
    }

    if !current.blocks.is_empty() || pages.is_empty() {
        pages.push(current);
    }
    pages
}

/// Greedy word wrap to at most `width` characters per line.
///
/// Counts characters, not bytes, so multi-byte input wraps without
/// panicking. Words longer than the width are hard-split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 {
            if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
                continue;
            }
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        // Start of a line: hard-split anything wider than the page.
        let chars: Vec<char> = word.chars().collect();
        let mut start = 0;
        while chars.len() - start > width {
            lines.push(chars[start..start + width].iter().collect());
            start += width;
        }
        current = chars[start..].iter().collect();
        current_len = chars.len() - start;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
