//! PDF text extraction with `pdf_oxide`, entirely in the browser.
//! The document never leaves the page; only the extracted text is sent on.

use std::sync::LazyLock;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use sfm_core::ports::DocumentTextPort;
use sfm_types::{AppError, Result};

#[derive(Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>> {
        let mut doc = PdfDocument::from_bytes(data.to_vec())
            .map_err(|e| AppError::Extraction(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| AppError::Extraction(format!("failed to read page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) => pages.push(text),
                Err(e) => log::warn!("Skipping page {}: {}", page_index + 1, e),
            }
        }
        Ok(pages)
    }
}

#[async_trait(?Send)]
impl DocumentTextPort for PdfTextExtractor {
    async fn extract_text(&self, data: &[u8]) -> Result<String> {
        let pages = Self::extract_pages(data)?;
        let page_count = pages.len();

        let text = join_pages(pages.iter().map(String::as_str));
        if text.is_empty() {
            return Err(AppError::Extraction("no text found in PDF".to_string()));
        }

        log::info!("PDF text extraction complete: {} pages, {} chars", page_count, text.len());
        Ok(text)
    }
}

/// Sanitise each page and join the non-empty ones with a blank line
pub fn join_pages<'a>(pages: impl IntoIterator<Item = &'a str>) -> String {
    pages
        .into_iter()
        .map(sanitize_extracted_text)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A word broken across two lines with a trailing hyphen
static HYPHEN_NEWLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)")
        .unwrap_or_else(|e| unreachable!("hyphen pattern is valid: {e}"))
});

/// NFKC-normalise (ligatures, full-width forms), rejoin hyphenated line
/// breaks, trim every line, collapse runs of whitespace inside a line, and
/// keep at most one blank line between paragraphs.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let rejoined = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    let mut result = String::with_capacity(rejoined.len());
    let mut prev_was_blank = false;
    let mut first_content = true;

    for line in rejoined.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            prev_was_blank = true;
        } else {
            if !first_content && prev_was_blank {
                result.push_str("\n\n");
            } else if !first_content {
                result.push('\n');
            }
            collapse_internal_whitespace(trimmed, &mut result);
            prev_was_blank = false;
            first_content = false;
        }
    }

    result
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
