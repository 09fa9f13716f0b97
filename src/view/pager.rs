//! Line-driven pager over retained pages.

use super::export::{copied_message, copy_to, ClipboardSink, ExportFormat};
use super::PageViewer;
use std::io::{self, BufRead, Write};

pub const PAGER_PROMPT: &str = "[n]ext [p]rev [c]opy [q]uit > ";

/// A command read by the pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerCommand {
    Next,
    Prev,
    Copy,
    Quit,
    Empty,
    Unknown(String),
}

impl PagerCommand {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "n" | "next" => Self::Next,
            "p" | "prev" => Self::Prev,
            "c" | "copy" => Self::Copy,
            "q" | "quit" => Self::Quit,
            "" => Self::Empty,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Writes the page indicator followed by the current page text.
pub fn write_current<W: Write>(out: &mut W, viewer: &PageViewer) -> io::Result<()> {
    if let (Some(indicator), Some(page)) = (viewer.indicator(), viewer.current()) {
        writeln!(out, "{} (source page {})", indicator, page.index)?;
        writeln!(out, "{}", page.text)?;
    }
    Ok(())
}

fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", PAGER_PROMPT)?;
    out.flush()
}

/// Shows the current page and executes commands from `input` until `quit`
/// or end of input.
///
/// Clipboard failures are reported on `out` and leave the pager running.
pub fn run_pager<R: BufRead, W: Write>(
    viewer: &mut PageViewer,
    input: R,
    out: &mut W,
    sink: &mut dyn ClipboardSink,
    format: ExportFormat,
) -> io::Result<()> {
    write_current(out, viewer)?;
    write_prompt(out)?;

    for line in input.lines() {
        match PagerCommand::parse(&line?) {
            PagerCommand::Next => {
                viewer.next();
                write_current(out, viewer)?;
            }
            PagerCommand::Prev => {
                viewer.prev();
                write_current(out, viewer)?;
            }
            PagerCommand::Copy => {
                if let Some(page) = viewer.current() {
                    match copy_to(sink, &page.text, format) {
                        Ok(()) => writeln!(out, "{}", copied_message(format))?,
                        Err(e) => writeln!(out, "Error copying text: {}", e)?,
                    }
                }
            }
            PagerCommand::Quit => break,
            PagerCommand::Empty => {}
            PagerCommand::Unknown(other) => writeln!(out, "Unknown command: {}", other)?,
        }
        write_prompt(out)?;
    }

    Ok(())
}
