//! Tender extraction CLI application.
//!
//! Reads a gazette PDF, keeps the pages carrying tender announcements and
//! prints, pages through, or copies the reduced notices.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tender_extract::view::{
    copied_message, copy_to, render_export, run_pager, write_current, SystemClipboard,
    NO_MATCHES_MESSAGE,
};
use tender_extract::{
    Backend, ExportFormat, ExtractionReport, ExtractionService, PageFilter, PageViewer,
};

/// Tender announcement extractor
///
/// Extracts tender notices from Arabic PDF gazettes and rewrites their
/// postponed-date lines. By default prints every matching page.
#[derive(Parser)]
#[command(name = "tender-extract")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input PDF file path
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// PDF decoding backend
    #[arg(long, value_enum, default_value_t = Backend::PdfExtract, global = true)]
    backend: Backend,

    /// Print retained pages as a JSON array
    #[arg(long)]
    json: bool,

    /// Keep every reduced page, skipping the announcement filter
    #[arg(long, global = true)]
    all: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Page through matching pages interactively (n, p, c, q)
    Browse {
        /// Input PDF file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Clipboard format used by the copy command
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Html)]
        format: ExportFormat,
    },

    /// Copy one matching page to the clipboard
    ///
    /// On Linux the command keeps running until another application takes
    /// over the clipboard, so the copied page stays pasteable.
    Copy {
        /// Input PDF file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Position of the page among the matching pages (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Clipboard format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Html)]
        format: ExportFormat,

        /// Print the clipboard payload instead of copying it
        #[arg(long)]
        stdout: bool,
    },
}

/// Command handler owning the configured extraction service.
struct ExtractHandler {
    service: ExtractionService,
}

impl ExtractHandler {
    fn new(backend: Backend, keep_all: bool) -> Self {
        let mut service = ExtractionService::with_backend(backend);
        if keep_all {
            service = service.with_filter(PageFilter::accept_all());
        }
        Self { service }
    }

    /// Runs an extraction; any read failure aborts the whole document.
    fn load(&self, input: &Path) -> Result<ExtractionReport> {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }

        let report = self
            .service
            .extract_file(input)
            .with_context(|| format!("Extraction failed for {}", input.display()))?;
        Ok(report)
    }

    /// Prints every retained page.
    fn print(&self, input: &Path, json: bool) -> Result<()> {
        let report = self.load(input)?;

        if json {
            println!("{}", report.to_json()?);
            return Ok(());
        }

        if report.is_empty() {
            println!("{}", NO_MATCHES_MESSAGE);
            return Ok(());
        }

        let mut viewer = PageViewer::new(report.pages);
        let mut out = io::stdout().lock();
        loop {
            write_current(&mut out, &viewer)?;
            if viewer.position() + 1 >= viewer.len() {
                break;
            }
            viewer.next();
            writeln!(out)?;
        }
        Ok(())
    }

    /// Interactive pager reading commands from stdin.
    fn browse(&self, input: &Path, format: ExportFormat) -> Result<()> {
        let report = self.load(input)?;
        if report.is_empty() {
            println!("{}", NO_MATCHES_MESSAGE);
            return Ok(());
        }

        let mut viewer = PageViewer::new(report.pages);
        let mut clipboard = SystemClipboard::session();
        run_pager(
            &mut viewer,
            io::stdin().lock(),
            &mut io::stdout().lock(),
            &mut clipboard,
            format,
        )?;
        Ok(())
    }

    /// Copies the page at a 1-based position among the retained pages.
    fn copy(
        &self,
        input: &Path,
        position: usize,
        format: ExportFormat,
        stdout: bool,
    ) -> Result<()> {
        let report = self.load(input)?;
        if report.is_empty() {
            println!("{}", NO_MATCHES_MESSAGE);
            return Ok(());
        }

        let total = report.len();
        let mut viewer = PageViewer::new(report.pages);
        let page = viewer.go_to(position).ok_or_else(|| {
            anyhow::anyhow!("Page {} out of range (1-{} matching pages)", position, total)
        })?;

        if stdout {
            println!("{}", render_export(&page.text, format));
            return Ok(());
        }

        let mut clipboard = SystemClipboard::one_shot();
        copy_to(&mut clipboard, &page.text, format).context("Error copying text")?;
        println!("{} (source page {})", copied_message(format), page.index);
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let handler = ExtractHandler::new(cli.backend, cli.all);

    match &cli.command {
        Some(Commands::Browse { input, format }) => {
            handler.browse(input, *format)?;
        }
        Some(Commands::Copy {
            input,
            page,
            format,
            stdout,
        }) => {
            handler.copy(input, *page, *format, *stdout)?;
        }
        None => {
            let input = cli
                .input
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("--input is required"))?;
            handler.print(input, cli.json)?;
        }
    }

    Ok(())
}
