// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::StringRecord;

/// A partial set of predicates over [`StringRecord`]s.
///
/// Every `None` field is unconstrained; a record matches when it satisfies
/// every field that is set. Length bounds are inclusive and signed so that a
/// query like "shorter than 0" can be represented (it matches nothing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSpec {
    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// True when the length bounds cannot both hold.
    pub fn has_conflict(&self) -> bool {
        matches!((self.min_length, self.max_length), (Some(min), Some(max)) if min > max)
    }

    pub fn matches(&self, record: &StringRecord) -> bool {
        let props = &record.properties;
        let length = i64::try_from(props.length).unwrap_or(i64::MAX);

        if let Some(is_palindrome) = self.is_palindrome {
            if props.is_palindrome != is_palindrome {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return false;
            }
        }
        if let Some(word_count) = self.word_count {
            if props.word_count != word_count {
                return false;
            }
        }
        if let Some(c) = self.contains_character {
            if record.count_of(c) == 0 {
                return false;
            }
        }
        true
    }
}
