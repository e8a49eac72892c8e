//! Parsing of the static player-name suggestion list.
//!
//! The list is plain text with one name per line. It only feeds name
//! suggestions in a roster screen; the engine never reads it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Parses a name list into sorted, unique suggestions.
///
/// Lines are trimmed and blank lines are skipped. Names differing only in
/// letter case count as the same name; the first spelling seen is kept.
/// The result is sorted case-insensitively.
///
/// # Example
///
/// ```
/// use ohhell::names::parse_name_list;
///
/// let names = parse_name_list("  zoe\n\nAda\nZOE\nbob\n");
/// assert_eq!(names, ["Ada", "bob", "zoe"]);
/// ```
#[must_use]
pub fn parse_name_list(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for line in text.lines() {
        let name = line.trim();
        if name.is_empty() || names.iter().any(|n| eq_ignore_case(n, name)) {
            continue;
        }
        names.push(String::from(name));
    }

    names.sort_by_cached_key(|n| n.to_lowercase());
    names
}

/// Returns whether two names match ignoring letter case.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
