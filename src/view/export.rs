//! Clipboard export of the displayed page.

use crate::error::{ExtractorError, ExtractorResult};
use clap::ValueEnum;
use std::fmt;

/// Payload format written to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// The page text as-is
    Plain,
    /// The page text wrapped in the bold Times New Roman fragment
    #[default]
    Html,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds the clipboard payload for a page's text.
pub fn render_export(text: &str, format: ExportFormat) -> String {
    match format {
        ExportFormat::Plain => text.to_string(),
        ExportFormat::Html => format!(
            "<div style=\"font-family: 'Times New Roman'; font-size: 20px; font-weight: bold;\">\
             <pre class=\"text-content\">{}</pre></div>",
            escape_html(text)
        ),
    }
}

/// Destination for exported text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> ExtractorResult<()>;
}

/// The desktop clipboard.
///
/// The HTML payload is written as text, so pasting into a plain editor
/// shows the markup.
///
/// On X11 and Wayland the process that set the clipboard keeps serving its
/// content, and the content is lost once the owning handle is dropped
/// unless a clipboard manager has taken a copy. The connection is opened on
/// the first write and held for the lifetime of the handle: keep one
/// [`SystemClipboard::session`] alive across an interactive session, and use
/// [`SystemClipboard::one_shot`] for a single write before the process exits.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    wait: bool,
}

impl SystemClipboard {
    /// Handle for a long-running session; content stays available while
    /// the handle lives.
    pub fn session() -> Self {
        Self {
            inner: None,
            wait: false,
        }
    }

    /// Handle for a single write from a short-lived process.
    ///
    /// On Linux the write blocks until another application takes over the
    /// clipboard, so the content outlives the process.
    pub fn one_shot() -> Self {
        Self {
            inner: None,
            wait: true,
        }
    }

    fn connection(&mut self) -> ExtractorResult<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ExtractorError::Clipboard("clipboard unavailable".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> ExtractorResult<()> {
        let wait = self.wait;
        let clipboard = self.connection()?;

        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;
            if wait {
                clipboard.set().wait().text(text.to_string())?;
                return Ok(());
            }
        }
        #[cfg(not(target_os = "linux"))]
        let _ = wait;

        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

/// Confirmation shown after a successful copy.
pub fn copied_message(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Html => "✓ Formatted text copied to clipboard!",
        ExportFormat::Plain => "✓ Text copied to clipboard!",
    }
}

/// Renders `text` in `format` and writes it to `sink`.
pub fn copy_to(
    sink: &mut dyn ClipboardSink,
    text: &str,
    format: ExportFormat,
) -> ExtractorResult<()> {
    let payload = render_export(text, format);
    sink.set_text(&payload)?;
    log::info!("Copied {} characters as {}", payload.chars().count(), format);
    Ok(())
}
