//! Line reduction for a single extracted page.
//!
//! The gazette layout is fixed: three header lines, three footer lines, and
//! a text-extraction artifact that emits the second logical line of the
//! notice as two physical lines in reverse order. The reducer strips the
//! frame, stitches the split line back together and cuts the notice off
//! after the "aforementioned tender ... above" sentence, replacing what
//! follows with the rendered date-change sentence.

use super::dates::format_date_line;
use super::Phrases;

/// Positional offsets of the gazette page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Lines dropped from the top of the page
    pub header_lines: usize,
    /// Lines dropped from the bottom of the page
    pub footer_lines: usize,
    /// Position (after framing) of the fragment that belongs at the end of
    /// `split_target`
    pub split_line: usize,
    /// Position (after framing) of the line receiving the fragment
    pub split_target: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_lines: 3,
            footer_lines: 3,
            split_line: 1,
            split_target: 2,
        }
    }
}

impl LayoutConfig {
    /// Smallest non-empty line count a page needs to be reduced at all.
    pub fn min_lines(&self) -> usize {
        self.header_lines + self.footer_lines + 1
    }
}

/// Reduces raw page text to the tender notice body.
#[derive(Debug, Clone, Default)]
pub struct LineReducer {
    layout: LayoutConfig,
}

impl LineReducer {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Reduces a page; returns an empty string when the page is too short.
    pub fn process(&self, raw_text: &str) -> String {
        let lines = non_empty_lines(raw_text);
        if lines.len() < self.layout.min_lines() {
            return String::new();
        }

        let mut relevant = self.drop_frame(&lines);
        self.merge_split_line(&mut relevant);
        truncate_at_anchor(&mut relevant);
        relevant.join("\n")
    }

    /// Drops the header and footer lines.
    pub fn drop_frame(&self, lines: &[&str]) -> Vec<String> {
        let end = lines.len().saturating_sub(self.layout.footer_lines);
        lines
            .get(self.layout.header_lines..end)
            .unwrap_or_default()
            .iter()
            .map(|line| line.to_string())
            .collect()
    }

    /// Appends the split fragment to its target line and removes it.
    ///
    /// Both parts are trimmed and joined with a single space. Sequences
    /// too short to hold the target are left alone.
    pub fn merge_split_line(&self, relevant: &mut Vec<String>) {
        let LayoutConfig {
            split_line,
            split_target,
            ..
        } = self.layout;
        if relevant.len() <= split_target || relevant.len() <= split_line {
            return;
        }

        let merged = format!(
            "{} {}",
            relevant[split_target].trim(),
            relevant[split_line].trim()
        );
        relevant[split_target] = merged;
        relevant.remove(split_line);
    }
}

/// Splits on `\n` and drops lines that are blank after trimming.
fn non_empty_lines(raw_text: &str) -> Vec<&str> {
    raw_text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Returns the position of the first line holding both anchor phrases.
pub fn find_anchor(lines: &[String]) -> Option<usize> {
    lines.iter().position(|line| {
        line.contains(Phrases::ANCHOR_TENDER) && line.contains(Phrases::ANCHOR_ABOVE)
    })
}

/// Cuts the lines after the anchor and appends the formatted date line.
///
/// The date line is whatever followed the anchor before truncation; when
/// the anchor is the last line an empty line is appended.
pub fn truncate_at_anchor(relevant: &mut Vec<String>) {
    let Some(anchor) = find_anchor(relevant) else {
        return;
    };

    let following = relevant.get(anchor + 1).cloned().unwrap_or_default();
    relevant.truncate(anchor + 1);
    relevant.push(format_date_line(&following));
}

/// Reduces raw page text using the default gazette layout.
pub fn process_lines(raw_text: &str) -> String {
    LineReducer::default().process(raw_text)
}
