// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};

use crate::models::StringProperties;

/// Compute every derived property of `value`.
///
/// Total over all inputs, including the empty string. Everything except the
/// palindrome check is computed over the raw, unnormalized input.
///
/// # Example
/// ```
/// use string_analyzer::analysis::analyze;
///
/// let props = analyze("hello");
/// assert_eq!(props.length, 5);
/// assert_eq!(props.unique_characters, 4);
/// assert!(!props.is_palindrome);
/// ```
pub fn analyze(value: &str) -> StringProperties {
    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: value.chars().collect::<HashSet<_>>().len(),
        word_count: value.split_whitespace().count(),
        sha256_hash: content_hash(value),
        character_frequency_map: character_frequencies(value),
    }
}

/// Lowercase hex SHA-256 of the UTF-8 bytes of `value`.
///
/// This is the record identity, so it must never normalize its input.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

fn is_palindrome(value: &str) -> bool {
    let normalized: Vec<char> = value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    normalized.iter().eq(normalized.iter().rev())
}

fn character_frequencies(value: &str) -> BTreeMap<char, usize> {
    let mut frequencies = BTreeMap::new();
    for c in value.chars() {
        *frequencies.entry(c).or_insert(0) += 1;
    }
    frequencies
}
