//! Tender announcement extraction from Arabic PDF gazettes.
//!
//! Each page of a gazette is reduced to the body of its tender notice, the
//! postponed-date line is rewritten into a fixed Arabic sentence with the
//! weekday of each date, and only pages that carry the announcement markers
//! are kept.
//!
//! # Architecture
//!
//! - [`domain`]: pure page transforms (line reduction, date sentence, filter)
//! - [`extraction`]: page sources (PDF backends) and the extraction driver
//! - [`view`]: pagination state, the interactive pager and clipboard export
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use tender_extract::ExtractionService;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ExtractionService::default();
//! let report = service.extract_file(Path::new("gazette.pdf"))?;
//!
//! for page in &report.pages {
//!     println!("page {}:\n{}", page.index, page.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ## Date-change sentence
//!
//! ```
//! use tender_extract::domain::format_date_line;
//!
//! let line = format_date_line("closing 2024-05-10 (was 2024-05-01)");
//! assert!(line.starts_with("ﺇﻟﻲ ﻳﻮﻡ ﺍﻟﺠﻤﻌﺔ ﺍﻟﻤﻮﺍﻓﻖ 2024-05-10"));
//!
//! // Anything other than exactly two dates is left alone
//! assert_eq!(format_date_line("no dates"), "no dates");
//! ```

pub mod domain;
pub mod error;
pub mod extraction;
pub mod view;

pub use domain::{
    format_date_line, process_lines, should_retain, LayoutConfig, LineReducer, PageFilter,
};
pub use error::{ExtractorError, ExtractorResult};
pub use extraction::{
    extract, Backend, ExtractionReport, ExtractionService, PageSource, RawPage, RetainedPage,
    StaticSource,
};
pub use view::{ExportFormat, PageViewer};
