//! PDF-backed page sources.
//!
//! Two backends are available. `pdf-extract` lays text out by position and
//! is the default; `lopdf` reads the content streams directly and copes
//! better with some malformed files.

use super::source::{read_pdf_bytes, PageSource, RawPage};
use crate::error::{ExtractorError, ExtractorResult};
use clap::ValueEnum;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Available PDF decoding backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    #[default]
    PdfExtract,
    Lopdf,
}

impl Backend {
    /// Creates the page source for this backend.
    pub fn source(self) -> Box<dyn PageSource> {
        match self {
            Self::PdfExtract => Box::new(PdfExtractSource::new()),
            Self::Lopdf => Box::new(LopdfSource::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PdfExtract => "pdf-extract",
            Self::Lopdf => "lopdf",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page source using `pdf_extract`'s per-page text layout.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractSource;

impl PdfExtractSource {
    pub fn new() -> Self {
        Self
    }

    /// Splits an in-memory PDF into per-page text blocks.
    ///
    /// `pdf_extract` panics on some malformed input, so the call runs
    /// behind `catch_unwind`.
    pub fn pages_from_mem(&self, bytes: &[u8]) -> Result<Vec<String>, String> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }));
        match result {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err("extraction panicked (malformed document)".to_string()),
        }
    }
}

impl PageSource for PdfExtractSource {
    fn read_pages(&self, input: &Path) -> ExtractorResult<Vec<RawPage>> {
        let bytes = read_pdf_bytes(input)?;
        let texts = self
            .pages_from_mem(&bytes)
            .map_err(|reason| ExtractorError::DocumentRead {
                path: input.to_path_buf(),
                backend: self.name().to_string(),
                reason,
            })?;

        log::debug!("{}: decoded {} page(s)", self.name(), texts.len());
        Ok(texts
            .iter()
            .zip(1..)
            .map(|(text, index)| RawPage::from_text(index, text))
            .collect())
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}

/// Page source reading content streams with `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct LopdfSource;

impl LopdfSource {
    pub fn new() -> Self {
        Self
    }
}

impl PageSource for LopdfSource {
    fn read_pages(&self, input: &Path) -> ExtractorResult<Vec<RawPage>> {
        let bytes = read_pdf_bytes(input)?;
        let doc =
            lopdf::Document::load_mem(&bytes).map_err(|e| ExtractorError::DocumentRead {
                path: input.to_path_buf(),
                backend: self.name().to_string(),
                reason: e.to_string(),
            })?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        log::debug!("{}: document has {} page(s)", self.name(), page_numbers.len());

        page_numbers
            .into_iter()
            .map(|number| {
                doc.extract_text(&[number])
                    .map(|text| RawPage::from_text(number, &text))
                    .map_err(|e| ExtractorError::PageRead {
                        page: number,
                        backend: self.name().to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect()
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}
