// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request and response bodies for the string endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{FilterSpec, StringRecord};
use crate::server::error::ApiError;

/// Query parameters for `GET /strings`.
///
/// Kept as raw strings so malformed values produce our own 400 body rather
/// than the extractor's plain-text rejection. Empty values count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListStringsQuery {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl TryFrom<ListStringsQuery> for FilterSpec {
    type Error = ApiError;

    fn try_from(query: ListStringsQuery) -> Result<Self, Self::Error> {
        let is_palindrome = match present(&query.is_palindrome) {
            None => None,
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(_) => return Err(invalid("is_palindrome must be 'true' or 'false'")),
        };

        let contains_character = match present(&query.contains_character) {
            None => None,
            Some(value) => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => return Err(invalid("contains_character must be a single character")),
                }
            }
        };

        Ok(FilterSpec {
            is_palindrome,
            min_length: parse_count(&query.min_length, "min_length")?,
            max_length: parse_count(&query.max_length, "max_length")?,
            word_count: parse_count(&query.word_count, "word_count")?,
            contains_character,
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_count<T: std::str::FromStr>(
    value: &Option<String>,
    name: &str,
) -> Result<Option<T>, ApiError> {
    match present(value) {
        None => Ok(None),
        Some(raw) if raw.bytes().all(|b| b.is_ascii_digit()) => raw
            .parse()
            .map(Some)
            .map_err(|_| invalid(&format!("{name} is out of range"))),
        Some(_) => Err(invalid(&format!("{name} must be a non-negative integer"))),
    }
}

fn invalid(detail: &str) -> ApiError {
    ApiError::BadRequest(format!("Invalid query parameters: {detail}"))
}

/// Query parameters for `GET /strings/filter-by-natural-language`.
#[derive(Debug, Default, Deserialize)]
pub struct NaturalLanguageQuery {
    pub query: Option<String>,
}

/// Body of `GET /strings`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListStringsResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: FilterSpec,
}

/// Body of `GET /strings/filter-by-natural-language`.
#[derive(Debug, Serialize, Deserialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSpec,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ListStringsQuery {
        let mut q = ListStringsQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "is_palindrome" => q.is_palindrome = value,
                "min_length" => q.min_length = value,
                "max_length" => q.max_length = value,
                "word_count" => q.word_count = value,
                "contains_character" => q.contains_character = value,
                other => panic!("unknown key {other}"),
            }
        }
        q
    }

    #[test]
    fn test_no_parameters_is_empty_filter() {
        let filter = FilterSpec::try_from(ListStringsQuery::default()).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_all_parameters() {
        let filter = FilterSpec::try_from(query(&[
            ("is_palindrome", "true"),
            ("min_length", "3"),
            ("max_length", "10"),
            ("word_count", "1"),
            ("contains_character", "a"),
        ]))
        .unwrap();

        assert_eq!(
            filter,
            FilterSpec {
                is_palindrome: Some(true),
                min_length: Some(3),
                max_length: Some(10),
                word_count: Some(1),
                contains_character: Some('a'),
            }
        );
    }

    #[test]
    fn test_empty_values_are_absent() {
        let filter = FilterSpec::try_from(query(&[("min_length", ""), ("is_palindrome", "")])).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_invalid_values_are_bad_requests() {
        for pairs in [
            [("is_palindrome", "yes")],
            [("min_length", "abc")],
            [("max_length", "-1")],
            [("word_count", "1.5")],
            [("contains_character", "ab")],
            [("min_length", "99999999999999999999999")],
        ] {
            let err = FilterSpec::try_from(query(&pairs)).unwrap_err();
            assert!(
                matches!(err, ApiError::BadRequest(ref msg) if msg.starts_with("Invalid query parameters")),
                "pairs: {pairs:?}, err: {err:?}"
            );
        }
    }

    #[test]
    fn test_multibyte_contains_character() {
        let filter = FilterSpec::try_from(query(&[("contains_character", "é")])).unwrap();
        assert_eq!(filter.contains_character, Some('é'));
    }
}
