//! Page source trait and page record types.
//!
//! A page source is the document-reading seam: it turns a file into an
//! ordered list of raw pages and knows nothing about tender notices.

use crate::error::{ExtractorError, ExtractorResult};
use serde::Serialize;
use std::path::Path;

/// Unprocessed text of one document page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    /// 1-based page number
    pub index: u32,
    /// Text fragments in the order the reader emitted them
    pub lines: Vec<String>,
}

impl RawPage {
    pub fn new(index: u32, lines: Vec<String>) -> Self {
        Self { index, lines }
    }

    /// Builds a page from a reader's text block, one fragment per line.
    pub fn from_text(index: u32, text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { index, lines }
    }

    /// Fragments joined with newlines, as fed to the line reducer.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// A page after line reduction. Empty text means the page was too short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedPage {
    pub index: u32,
    pub text: String,
}

/// A reduced page that passed the page filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetainedPage {
    pub index: u32,
    pub text: String,
}

impl From<ProcessedPage> for RetainedPage {
    fn from(page: ProcessedPage) -> Self {
        Self {
            index: page.index,
            text: page.text,
        }
    }
}

/// Reader turning a document into raw pages.
pub trait PageSource: Send + Sync {
    /// Reads every page of the document at `input`, in ascending order.
    ///
    /// Any failure aborts the whole read.
    fn read_pages(&self, input: &Path) -> ExtractorResult<Vec<RawPage>>;

    /// Returns a human-readable name for this source.
    fn name(&self) -> &str;
}

/// Pages held in memory, for callers that decode documents themselves.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pages: Vec<RawPage>,
}

impl StaticSource {
    pub fn new(pages: Vec<RawPage>) -> Self {
        Self { pages }
    }

    /// Builds a source from per-page text blocks numbered from 1.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        let pages = texts
            .iter()
            .zip(1..)
            .map(|(text, index)| RawPage::from_text(index, text.as_ref()))
            .collect();
        Self { pages }
    }
}

impl PageSource for StaticSource {
    fn read_pages(&self, _input: &Path) -> ExtractorResult<Vec<RawPage>> {
        Ok(self.pages.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Magic bytes every PDF file starts with.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Returns true if the path looks like a PDF by extension.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Reads a document and checks that it is a PDF.
///
/// A file is accepted when it has a `.pdf` extension or starts with the
/// `%PDF-` header.
pub fn read_pdf_bytes(input: &Path) -> ExtractorResult<Vec<u8>> {
    let bytes = std::fs::read(input).map_err(|e| ExtractorError::Io {
        path: input.to_path_buf(),
        source: e,
    })?;

    if !has_pdf_extension(input) && !bytes.starts_with(PDF_MAGIC) {
        return Err(ExtractorError::not_a_pdf(input));
    }

    Ok(bytes)
}
