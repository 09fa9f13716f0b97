//! Custom assertions for extraction testing.

use tender_extract::RetainedPage;

/// Asserts that the retained pages come from exactly these source pages,
/// in this order.
///
/// # Panics
/// Panics with the actual page indices when they differ.
pub fn assert_retained_indices(pages: &[RetainedPage], expected: &[u32]) {
    let actual: Vec<u32> = pages.iter().map(|p| p.index).collect();
    assert_eq!(
        actual, expected,
        "Retained page indices {:?} differ from expected {:?}",
        actual, expected
    );
}

/// Asserts that the last line of a reduced page equals `expected`.
///
/// # Panics
/// Panics if the text is empty or its last line differs.
pub fn assert_last_line(text: &str, expected: &str) {
    let last = text
        .split('\n')
        .last()
        .unwrap_or_else(|| panic!("Reduced text is empty"));
    assert_eq!(
        last, expected,
        "Last line of reduced page differs.\nFull text:\n{}",
        text
    );
}

/// Asserts that none of the given fragments survived reduction.
///
/// # Panics
/// Panics listing every fragment that is still present.
pub fn assert_all_dropped(text: &str, fragments: &[&str]) {
    let found: Vec<&str> = fragments
        .iter()
        .copied()
        .filter(|f| text.contains(f))
        .collect();
    assert!(
        found.is_empty(),
        "The following fragments should have been dropped but were found: {:?}",
        found
    );
}
