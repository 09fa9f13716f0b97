//! Presentation state over a page collection.
//!
//! The viewer owns the retained pages of the latest extraction and the
//! position of the page being shown. A new extraction replaces both.

pub mod export;
pub mod pager;

pub use export::{
    copied_message, copy_to, render_export, ClipboardSink, ExportFormat, SystemClipboard,
};
pub use pager::{run_pager, write_current, PagerCommand};

use crate::extraction::RetainedPage;

/// Message shown when an extraction retained nothing.
pub const NO_MATCHES_MESSAGE: &str = "No matching content found.";

/// Paginated view over retained pages.
#[derive(Debug, Clone, Default)]
pub struct PageViewer {
    pages: Vec<RetainedPage>,
    position: usize,
}

impl PageViewer {
    pub fn new(pages: Vec<RetainedPage>) -> Self {
        Self { pages, position: 0 }
    }

    /// Replaces the collection and moves back to the first page.
    pub fn reset(&mut self, pages: Vec<RetainedPage>) {
        self.pages = pages;
        self.position = 0;
    }

    /// The page being shown, if any.
    pub fn current(&self) -> Option<&RetainedPage> {
        self.pages.get(self.position)
    }

    /// Moves forward one page; a no-op on the last page.
    pub fn next(&mut self) -> Option<&RetainedPage> {
        if self.position + 1 < self.pages.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Moves back one page; a no-op on the first page.
    pub fn prev(&mut self) -> Option<&RetainedPage> {
        self.position = self.position.saturating_sub(1);
        self.current()
    }

    /// Jumps to a 1-based position in the collection.
    pub fn go_to(&mut self, number: usize) -> Option<&RetainedPage> {
        if number == 0 || number > self.pages.len() {
            return None;
        }
        self.position = number - 1;
        self.current()
    }

    /// 0-based position of the current page.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[RetainedPage] {
        &self.pages
    }

    /// "Page X of N" for the current position.
    pub fn indicator(&self) -> Option<String> {
        self.current()
            .map(|_| format!("Page {} of {}", self.position + 1, self.pages.len()))
    }
}
