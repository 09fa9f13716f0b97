//! Date-change sentence rendering.
//!
//! Tender notices announce a postponed closing date as a line carrying two
//! ISO dates. That line is rewritten into a fixed Arabic sentence reading
//! "to <day> corresponding to <later date> instead of <day> corresponding to
//! <earlier date>".

use super::days::day_name_for;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Two dates pulled from a single line, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePair<'a> {
    pub earlier: NaiveDate,
    pub later: NaiveDate,
    /// The earlier date as it appeared in the line
    pub earlier_text: &'a str,
    /// The later date as it appeared in the line
    pub later_text: &'a str,
}

impl DatePair<'_> {
    /// Renders the date-change sentence for this pair.
    pub fn render(&self) -> String {
        format!(
            "ﺇﻟﻲ ﻳﻮﻡ {} ﺍﻟﻤﻮﺍﻓﻖ {} ﺑﺪﻻ ﻣﻦ ﻳﻮﻡ {} ﺍﻟﻤﻮﺍﻓﻖ {}",
            day_name_for(self.later),
            self.later_text,
            day_name_for(self.earlier),
            self.earlier_text
        )
    }
}

/// ISO `YYYY-MM-DD` with ASCII digits only; Arabic-Indic digits never match.
fn iso_date() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("Valid date regex"));
    &PATTERN
}

/// Extracts every ISO date substring of `line`, in order of appearance.
pub fn extract_dates(line: &str) -> Vec<&str> {
    iso_date().find_iter(line).map(|m| m.as_str()).collect()
}

/// Parses the date pair of a line.
///
/// Returns `None` unless the line holds exactly two ISO date substrings
/// that are both real calendar dates.
pub fn parse_date_pair(line: &str) -> Option<DatePair<'_>> {
    let dates = extract_dates(line);
    let [first, second] = dates[..] else {
        return None;
    };

    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    let (a, b) = (parse(first)?, parse(second)?);

    let pair = if a > b {
        DatePair {
            earlier: b,
            later: a,
            earlier_text: second,
            later_text: first,
        }
    } else {
        DatePair {
            earlier: a,
            later: b,
            earlier_text: first,
            later_text: second,
        }
    };
    Some(pair)
}

/// Rewrites a two-date line into the date-change sentence.
///
/// Lines with zero, one or more than two dates, or with a date that is not
/// a real calendar day (`2024-02-30`), are returned unchanged.
pub fn format_date_line(line: &str) -> String {
    match parse_date_pair(line) {
        Some(pair) => pair.render(),
        None => {
            log::trace!("date line left unchanged: {:?}", line);
            line.to_string()
        }
    }
}
