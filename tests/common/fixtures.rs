//! Test fixtures: gazette page text and PDF builders.

use anyhow::Result;
use printpdf::*;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tender_extract::domain::Phrases;
use tender_extract::RawPage;

/// Builder for the raw text of one gazette page.
///
/// Produces the layout the line reducer expects: three header lines, a
/// title, the split second line (emitted tail first), optional body lines,
/// an optional anchor line with its date line, trailing lines and three
/// footer lines.
#[derive(Debug, Clone)]
pub struct GazettePageBuilder {
    title: String,
    split_head: String,
    split_tail: String,
    body: Vec<String>,
    anchor: Option<String>,
    date_line: Option<String>,
    trailing: Vec<String>,
    footer: Vec<String>,
}

impl GazettePageBuilder {
    /// Creates a tender announcement page with the default markers.
    pub fn new() -> Self {
        Self {
            title: Phrases::ANNOUNCEMENT.to_string(),
            split_head: format!("{} 15/2024", Phrases::TENDER_NUMBER),
            split_tail: "(ﺗﻮﺭﻳﺪ ﺃﺟﻬﺰﺓ)".to_string(),
            body: Vec::new(),
            anchor: None,
            date_line: None,
            trailing: Vec::new(),
            footer: vec![
                "footer one".to_string(),
                "footer two".to_string(),
                "footer three".to_string(),
            ],
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets both halves of the line split by the text extractor.
    pub fn with_split(mut self, head: &str, tail: &str) -> Self {
        self.split_head = head.to_string();
        self.split_tail = tail.to_string();
        self
    }

    pub fn with_body(mut self, line: &str) -> Self {
        self.body.push(line.to_string());
        self
    }

    /// Adds the "aforementioned tender ... above" line followed by `date_line`.
    pub fn with_postponement(mut self, date_line: &str) -> Self {
        self.anchor = Some(anchor_line());
        self.date_line = Some(date_line.to_string());
        self
    }

    pub fn with_trailing(mut self, line: &str) -> Self {
        self.trailing.push(line.to_string());
        self
    }

    /// Replaces the last footer line, e.g. with the excluded URL.
    pub fn with_footer(mut self, line: &str) -> Self {
        self.footer[2] = line.to_string();
        self
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            "header one".to_string(),
            "header two".to_string(),
            "header three".to_string(),
            self.title.clone(),
            self.split_tail.clone(),
            self.split_head.clone(),
        ];
        lines.extend(self.body.iter().cloned());
        lines.extend(self.anchor.iter().cloned());
        lines.extend(self.date_line.iter().cloned());
        lines.extend(self.trailing.iter().cloned());
        lines.extend(self.footer.iter().cloned());
        lines
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }

    pub fn build(&self, index: u32) -> RawPage {
        RawPage::new(index, self.lines())
    }
}

impl Default for GazettePageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The anchor sentence closing a postponement notice.
pub fn anchor_line() -> String {
    format!(
        "ﻧﻮﺩ ﺍﻹﺣﺎﻃﺔ ﺑﺘﻤﺪﻳﺪ ﻣﻮﻋﺪ ﺇﻏﻼﻕ {} {}",
        Phrases::ANCHOR_TENDER,
        Phrases::ANCHOR_ABOVE
    )
}

/// Builder for multi-page PDFs with ASCII text lines.
///
/// The builtin fonts cannot encode Arabic, so PDF fixtures only exercise
/// the document-reading path.
#[derive(Debug, Clone, Default)]
pub struct TestPdfBuilder {
    pages: Vec<Vec<String>>,
}

impl TestPdfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page holding the given lines, top to bottom.
    pub fn with_page(mut self, lines: &[&str]) -> Self {
        self.pages
            .push(lines.iter().map(|line| line.to_string()).collect());
        self
    }

    /// Builds the PDF and writes it to the specified path.
    pub fn build(self, output_path: &Path) -> Result<PathBuf> {
        let (doc, first_page, first_layer) =
            PdfDocument::new("Gazette", Mm(210.0), Mm(297.0), "Layer 1");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        for (i, lines) in self.pages.iter().enumerate() {
            let layer = if i == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
                doc.get_page(page).get_layer(layer)
            };

            for (row, line) in lines.iter().enumerate() {
                let y = 270.0 - 10.0 * row as f32;
                layer.use_text(line.as_str(), 12.0, Mm(20.0), Mm(y), &font);
            }
        }

        doc.save(&mut BufWriter::new(fs::File::create(output_path)?))?;
        Ok(output_path.to_path_buf())
    }
}
