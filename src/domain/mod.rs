//! Page text transforms for tender announcement documents.
//!
//! Everything in this module is pure and synchronous: a page goes in as a
//! string, a reduced string comes out, and a filter decides whether the
//! result is worth keeping.
//!
//! The marker phrases below are written in Arabic presentation forms
//! (U+FE70..U+FEFF) because that is what the gazette PDFs emit on text
//! extraction. They must not be normalized.

pub mod dates;
pub mod days;
pub mod filter;
pub mod lines;

pub use dates::{format_date_line, parse_date_pair, DatePair};
pub use days::{day_name, day_name_for, ARABIC_DAYS};
pub use filter::{should_retain, PageFilter};
pub use lines::{process_lines, LayoutConfig, LineReducer};

/// Fixed marker phrases found in the gazette pages.
pub struct Phrases;

impl Phrases {
    /// "the aforementioned tender"; first half of the truncation anchor.
    pub const ANCHOR_TENDER: &'static str = "ﺍﻟﻤﻨﺎﻗﺼﺔ ﺍﻟﻤﺬﻛﻮﺭﻩ";

    /// "above"; second half of the truncation anchor.
    pub const ANCHOR_ABOVE: &'static str = "ﺃﻋﻼﻩ";

    /// Announcement heading, with the tatweel padding as extracted.
    pub const ANNOUNCEMENT: &'static str = "ﺇﻋــــــــﻼﻥ";

    /// "regarding tender number".
    pub const TENDER_NUMBER: &'static str = "ﺑﺸﺄﻥ ﺍﻟﻤﻨﺎﻗﺼﺔ ﺭﻗﻢ";

    /// Footer URL of boilerplate pages that repeat the announcement markers.
    pub const EXCLUDED_URL: &'static str = "WWW.CAPT.GOV.KW";
}
