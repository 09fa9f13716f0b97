//! Page retention rules.

use super::Phrases;

/// Substring rules deciding whether a reduced page is kept.
///
/// A page is kept when it contains every required phrase and none of the
/// excluded ones. Matching is plain, case-sensitive containment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFilter {
    required: Vec<String>,
    excluded: Vec<String>,
}

impl PageFilter {
    pub fn new(required: Vec<String>, excluded: Vec<String>) -> Self {
        Self { required, excluded }
    }

    /// A filter that keeps every page.
    pub fn accept_all() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn should_retain(&self, text: &str) -> bool {
        self.required.iter().all(|p| text.contains(p.as_str()))
            && !self.excluded.iter().any(|p| text.contains(p.as_str()))
    }
}

impl Default for PageFilter {
    /// Tender announcement pages, minus the authority's boilerplate pages.
    fn default() -> Self {
        Self::new(
            vec![
                Phrases::ANNOUNCEMENT.to_string(),
                Phrases::TENDER_NUMBER.to_string(),
            ],
            vec![Phrases::EXCLUDED_URL.to_string()],
        )
    }
}

/// Applies the default tender announcement rules.
pub fn should_retain(text: &str) -> bool {
    PageFilter::default().should_retain(text)
}
