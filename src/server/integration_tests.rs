// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end tests of the router against a real store, driven through
//! `tower::ServiceExt::oneshot` without opening a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::server::{router, AppState};
use crate::storage::{JsonFileStore, MemoryStore};
use crate::traits::StringStore;

fn app() -> Router {
    router(AppState::new(Arc::new(MemoryStore::new())))
}

fn app_with(store: Arc<dyn StringStore>) -> Router {
    router(AppState::new(store))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn post_string(app: &Router, value: &str) -> (StatusCode, Value) {
    send(app, Method::POST, "/strings", Some(json!({ "value": value }))).await
}

#[tokio::test]
async fn test_create_string() {
    let app = app();
    let (status, body) = post_string(&app, "hello").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["id"],
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    assert_eq!(body["value"], "hello");
    assert_eq!(body["properties"]["length"], 5);
    assert_eq!(body["properties"]["is_palindrome"], false);
    assert_eq!(body["properties"]["unique_characters"], 4);
    assert_eq!(body["properties"]["word_count"], 1);
    assert_eq!(body["properties"]["sha256_hash"], body["id"]);
    assert_eq!(
        body["properties"]["character_frequency_map"],
        json!({ "h": 1, "e": 1, "l": 2, "o": 1 })
    );
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_duplicate_string_is_conflict() {
    let app = app();

    let (status, _) = post_string(&app, "test").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_string(&app, "test").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "String already exists");
}

#[tokio::test]
async fn test_create_rejects_bad_bodies() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/strings", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body or missing \"value\" field");

    let (status, _) = send(&app, Method::POST, "/strings", Some(json!({ "value": null }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/strings", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::POST, "/strings", Some(json!({ "value": 42 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Invalid data type for \"value\" (must be string)");
}

#[tokio::test]
async fn test_empty_string_can_be_stored() {
    let app = app();
    let (status, body) = post_string(&app, "").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["properties"]["is_palindrome"], true);
    assert_eq!(body["properties"]["word_count"], 0);
}

#[tokio::test]
async fn test_get_string() {
    let app = app();
    post_string(&app, "world").await;

    let (status, body) = send(&app, Method::GET, "/strings/world", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "world");
    assert_eq!(body["properties"]["length"], 5);

    let (status, body) = send(&app, Method::GET, "/strings/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "String does not exist");
}

#[tokio::test]
async fn test_get_string_decodes_path() {
    let app = app();
    post_string(&app, "hello world").await;

    let (status, body) = send(&app, Method::GET, "/strings/hello%20world", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "hello world");
    assert_eq!(body["properties"]["word_count"], 2);
}

#[tokio::test]
async fn test_list_strings_with_filters() {
    let app = app();
    for value in ["radar", "hello world", "zebra", "a"] {
        post_string(&app, value).await;
    }

    let (status, body) = send(&app, Method::GET, "/strings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
    assert_eq!(body["data"][0]["value"], "a");
    assert_eq!(body["filters_applied"], json!({}));

    let (_, body) = send(&app, Method::GET, "/strings?is_palindrome=true", None).await;
    assert_eq!(body["count"], 2);
    for item in body["data"].as_array().unwrap() {
        assert_eq!(item["properties"]["is_palindrome"], true);
    }
    assert_eq!(body["filters_applied"], json!({ "is_palindrome": true }));

    let (_, body) = send(&app, Method::GET, "/strings?word_count=2", None).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["value"], "hello world");

    let (_, body) = send(&app, Method::GET, "/strings?contains_character=z", None).await;
    assert_eq!(body["count"], 1);
    assert!(body["data"][0]["properties"]["character_frequency_map"]["z"].as_u64().unwrap() > 0);

    let (_, body) = send(&app, Method::GET, "/strings?min_length=5&max_length=5", None).await;
    let values: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["zebra", "radar"]);
}

#[tokio::test]
async fn test_list_strings_rejects_bad_parameters() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/strings?min_length=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid query parameters"));

    let (status, body) = send(&app, Method::GET, "/strings?min_length=10&max_length=2", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Conflicting filters");
}

#[tokio::test]
async fn test_filter_by_natural_language() {
    let app = app();
    for value in ["radar", "hello", "racecar level", "a"] {
        post_string(&app, value).await;
    }

    let (status, body) = send(
        &app,
        Method::GET,
        "/strings/filter-by-natural-language?query=all%20single%20word%20palindromic%20strings",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(
        body["interpreted_query"]["original"],
        "all single word palindromic strings"
    );
    assert_eq!(
        body["interpreted_query"]["parsed_filters"],
        json!({ "is_palindrome": true, "word_count": 1 })
    );
    let values: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["a", "radar"]);
}

#[tokio::test]
async fn test_filter_by_natural_language_failures() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/strings/filter-by-natural-language?query=invalid%20query",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unable to parse natural language query");

    let (status, body) = send(&app, Method::GET, "/strings/filter-by-natural-language", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Query parameter required");

    let (status, _) = send(
        &app,
        Method::GET,
        "/strings/filter-by-natural-language?query=",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_string() {
    let app = app();
    post_string(&app, "delete me").await;

    let (status, body) = send(&app, Method::DELETE, "/strings/delete%20me", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, "/strings/delete%20me", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/strings/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_string_shadowed_by_filter_route() {
    let app = app();
    let (status, _) = post_string(&app, "filter-by-natural-language").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/strings/filter-by-natural-language",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/strings/filter-by-natural-language",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "String does not exist");
}

#[tokio::test]
async fn test_unsupported_method_is_json_405() {
    let app = app();

    let (status, body) = send(&app, Method::PUT, "/strings/hello", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method PUT not allowed on /strings/hello");

    let (status, body) = send(&app, Method::DELETE, "/strings", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method DELETE not allowed on /strings");

    let (status, body) = send(
        &app,
        Method::POST,
        "/strings/filter-by-natural-language?query=palindromes",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body["error"],
        "Method POST not allowed on /strings/filter-by-natural-language"
    );
}

#[tokio::test]
async fn test_oversized_length_in_query_matches_nothing() {
    let app = app();
    post_string(&app, "racecar").await;
    post_string(&app, "level").await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/strings/filter-by-natural-language?query=palindromic%20strings%20longer%20than%2099999999999999999999%20characters",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(
        body["interpreted_query"]["parsed_filters"],
        json!({ "is_palindrome": true, "min_length": i64::MAX })
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/nope?x=1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route /nope?x=1 not found");
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_json_file_store_behind_router() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strings.json");

    {
        let store = JsonFileStore::open(&path).await.unwrap();
        let app = app_with(Arc::new(store));
        let (status, _) = post_string(&app, "persist me").await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let store = JsonFileStore::open(&path).await.unwrap();
    let app = app_with(Arc::new(store));
    let (status, body) = send(&app, Method::GET, "/strings/persist%20me", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "persist me");
}
