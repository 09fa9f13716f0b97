//! Extraction driver tying page sources to the page transforms.
//!
//! The service reads raw pages from a [`PageSource`], reduces each page,
//! filters it, and collects the retained pages in page order.

pub mod pdf;
pub mod source;

pub use pdf::{Backend, LopdfSource, PdfExtractSource};
pub use source::{PageSource, ProcessedPage, RawPage, RetainedPage, StaticSource};

use crate::domain::{LayoutConfig, LineReducer, PageFilter};
use crate::error::ExtractorResult;
use std::path::Path;

/// Outcome of extracting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Pages read from the document
    pub pages_scanned: usize,

    /// Retained pages in ascending page order
    pub pages: Vec<RetainedPage>,
}

impl ExtractionReport {
    /// Returns true if no page matched.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Renders the retained pages as a pretty-printed JSON array.
    pub fn to_json(&self) -> ExtractorResult<String> {
        Ok(serde_json::to_string_pretty(&self.pages)?)
    }
}

/// Extraction service coordinating a page source with the transforms.
pub struct ExtractionService {
    source: Box<dyn PageSource>,
    reducer: LineReducer,
    filter: PageFilter,
}

impl ExtractionService {
    /// Creates a service over the given source with the default layout and
    /// tender announcement filter.
    pub fn new(source: Box<dyn PageSource>) -> Self {
        Self {
            source,
            reducer: LineReducer::default(),
            filter: PageFilter::default(),
        }
    }

    /// Creates a service reading PDFs with the given backend.
    pub fn with_backend(backend: Backend) -> Self {
        Self::new(backend.source())
    }

    /// Replaces the page filter.
    pub fn with_filter(mut self, filter: PageFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Replaces the page layout used for line reduction.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.reducer = LineReducer::new(layout);
        self
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Reduces a single raw page.
    pub fn process_page(&self, page: &RawPage) -> ProcessedPage {
        ProcessedPage {
            index: page.index,
            text: self.reducer.process(&page.text()),
        }
    }

    /// Reduces and filters pages, keeping input order.
    ///
    /// Pages reduced to empty text are never retained.
    pub fn extract<I>(&self, pages: I) -> Vec<RetainedPage>
    where
        I: IntoIterator<Item = RawPage>,
    {
        pages
            .into_iter()
            .filter_map(|page| {
                let processed = self.process_page(&page);
                let keep =
                    !processed.text.is_empty() && self.filter.should_retain(&processed.text);
                log::debug!(
                    "page {}: {}",
                    processed.index,
                    if keep { "retained" } else { "skipped" }
                );
                keep.then(|| RetainedPage::from(processed))
            })
            .collect()
    }

    /// Reads a document and extracts its retained pages.
    ///
    /// A read failure aborts the extraction; no partial result is returned.
    pub fn extract_file(&self, input: &Path) -> ExtractorResult<ExtractionReport> {
        log::info!(
            "Extracting '{}' with {}",
            input.display(),
            self.source.name()
        );

        let raw_pages = self.source.read_pages(input)?;
        let pages_scanned = raw_pages.len();
        let pages = self.extract(raw_pages);

        log::info!(
            "Retained {} of {} page(s) from '{}'",
            pages.len(),
            pages_scanned,
            input.display()
        );

        Ok(ExtractionReport {
            pages_scanned,
            pages,
        })
    }
}

impl Default for ExtractionService {
    fn default() -> Self {
        Self::with_backend(Backend::default())
    }
}

/// Reduces and filters pages with the default layout and filter.
pub fn extract<I>(pages: I) -> Vec<RetainedPage>
where
    I: IntoIterator<Item = RawPage>,
{
    ExtractionService::new(Box::new(StaticSource::default())).extract(pages)
}
