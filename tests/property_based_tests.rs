//! Property-based tests for the page transforms.
//!
//! Uses proptest to check the transforms across generated lines and pages:
//! short pages always reduce to nothing, the date sentence ignores input
//! order, and the filter reacts only to its marker substrings.

use chrono::NaiveDate;
use proptest::prelude::*;
use tender_extract::domain::dates::extract_dates;
use tender_extract::domain::Phrases;
use tender_extract::{format_date_line, process_lines, should_retain};

/// Text without digits, so it never contributes a date match.
fn filler() -> impl Strategy<Value = String> {
    "[a-zA-Z ,.:/()]{0,20}"
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("day <= 28 is valid"))
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn notice() -> String {
    format!("{}\n{} 3/2024", Phrases::ANNOUNCEMENT, Phrases::TENDER_NUMBER)
}

proptest! {
    #[test]
    fn short_pages_reduce_to_nothing(lines in prop::collection::vec("[^\n]{0,30}", 0..7)) {
        prop_assert_eq!(process_lines(&lines.join("\n")), "");
    }

    #[test]
    fn blank_lines_never_count(
        lines in prop::collection::vec("[a-z]{1,10}", 0..7),
        blanks in 0usize..10,
    ) {
        let mut all = lines.clone();
        all.extend(std::iter::repeat(" \t".to_string()).take(blanks));
        prop_assert_eq!(process_lines(&all.join("\n")), "");
    }

    #[test]
    fn date_sentence_is_order_invariant(
        a in date(),
        b in date(),
        pre in filler(),
        mid in filler(),
        post in filler(),
    ) {
        let forward = format!("{}{}{}{}{}", pre, iso(a), mid, iso(b), post);
        let backward = format!("{}{}{}{}{}", pre, iso(b), mid, iso(a), post);
        prop_assert_eq!(format_date_line(&forward), format_date_line(&backward));
    }

    #[test]
    fn later_date_comes_first(a in date(), b in date(), mid in filler()) {
        prop_assume!(a != b);
        let (earlier, later) = if a < b { (a, b) } else { (b, a) };
        let out = format_date_line(&format!("{} {} {}", iso(a), mid, iso(b)));

        let later_pos = out.find(&iso(later)).expect("later date present");
        let earlier_pos = out.find(&iso(earlier)).expect("earlier date present");
        prop_assert!(later_pos < earlier_pos);
    }

    #[test]
    fn wrong_date_count_is_identity(
        dates in prop::collection::vec(date(), 0..6),
        sep in filler(),
    ) {
        prop_assume!(dates.len() != 2);
        let line = dates
            .iter()
            .map(|d| iso(*d))
            .collect::<Vec<_>>()
            .join(&format!(" {} ", sep));
        prop_assert_eq!(extract_dates(&line).len(), dates.len());
        prop_assert_eq!(format_date_line(&line), line);
    }

    #[test]
    fn excluded_url_always_rejects(pre in filler(), post in filler()) {
        let text = format!("{}{}\n{}{}", pre, notice(), Phrases::EXCLUDED_URL, post);
        prop_assert!(!should_retain(&text));
    }

    #[test]
    fn missing_phrase_always_rejects(pre in filler(), post in filler()) {
        let announcement_only = format!("{}{}{}", pre, Phrases::ANNOUNCEMENT, post);
        let number_only = format!("{}{}{}", pre, Phrases::TENDER_NUMBER, post);
        prop_assert!(!should_retain(&announcement_only));
        prop_assert!(!should_retain(&number_only));
    }

    #[test]
    fn retention_has_no_hidden_state(text in ".{0,60}") {
        let first = should_retain(&text);
        let again = should_retain(&(text.clone() + ""));
        prop_assert_eq!(first, again);
    }
}
