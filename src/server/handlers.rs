// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! String endpoint handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{Method, StatusCode, Uri},
    Json,
};
use serde_json::Value;
use tracing::Instrument;

use crate::analysis::{content_hash, interpret};
use crate::models::{FilterSpec, StringRecord};
use crate::observability::messages::strings::{
    FilterConflict, QueryInterpreted, QueryNotInterpreted, StringAlreadyExists, StringCreated,
    StringDeleted,
};
use crate::observability::messages::StructuredLog;
use crate::server::error::{ApiError, ApiResult};
use crate::server::models::{
    HealthResponse, InterpretedQuery, ListStringsQuery, ListStringsResponse, NaturalLanguageQuery,
    NaturalLanguageResponse,
};
use crate::server::state::AppState;

/// Path segment of the natural-language filter route under `/strings`.
pub const NATURAL_LANGUAGE_SEGMENT: &str = "filter-by-natural-language";

/// POST /strings
///
/// Analyze and store a new string. The body must be a JSON object with a
/// string `value`.
pub async fn create_string(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StringRecord>)> {
    let Json(body) = payload.map_err(|_| missing_value())?;

    let value = match body.get("value") {
        None | Some(Value::Null) => return Err(missing_value()),
        Some(Value::String(value)) => value.clone(),
        Some(_) => {
            return Err(ApiError::Unprocessable(
                "Invalid data type for \"value\" (must be string)".to_string(),
            ))
        }
    };

    let record = StringRecord::new(value);
    let id = record.id.clone();

    match state.store.create(record).await {
        Ok(created) => {
            StringCreated {
                id: &created.id,
                length: created.properties.length,
            }
            .log();
            Ok((StatusCode::CREATED, Json(created)))
        }
        Err(err) => {
            if matches!(err, crate::errors::StoreError::Conflict { .. }) {
                StringAlreadyExists { id: &id }.log();
            }
            Err(err.into())
        }
    }
}

/// GET /strings/{value}
pub async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> ApiResult<Json<StringRecord>> {
    state
        .store
        .find_by_id(&content_hash(&value))
        .await?
        .map(Json)
        .ok_or_else(string_not_found)
}

/// GET /strings
///
/// List stored strings, newest first, narrowed by optional query parameters.
pub async fn list_strings(
    State(state): State<AppState>,
    query: Result<Query<ListStringsQuery>, QueryRejection>,
) -> ApiResult<Json<ListStringsResponse>> {
    let Query(query) =
        query.map_err(|_| ApiError::BadRequest("Invalid query parameters".to_string()))?;
    let filter = FilterSpec::try_from(query)?;
    reject_conflicting(&filter)?;

    let data = state.store.find_many(&filter).await?;
    Ok(Json(ListStringsResponse {
        count: data.len(),
        data,
        filters_applied: filter,
    }))
}

/// GET /strings/filter-by-natural-language?query=...
pub async fn filter_by_natural_language(
    State(state): State<AppState>,
    query: Result<Query<NaturalLanguageQuery>, QueryRejection>,
) -> ApiResult<Json<NaturalLanguageResponse>> {
    let original = query
        .ok()
        .and_then(|Query(q)| q.query)
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Query parameter required".to_string()))?;

    let Some(filter) = interpret(&original) else {
        QueryNotInterpreted { query: &original }.log();
        return Err(ApiError::BadRequest(
            "Unable to parse natural language query".to_string(),
        ));
    };
    let interpreted = QueryInterpreted {
        query: &original,
        filter: &filter,
    };
    let span = interpreted.span("natural_language_filter");
    span.in_scope(|| interpreted.log());
    span.in_scope(|| reject_conflicting(&filter))?;

    let data = state.store.find_many(&filter).instrument(span).await?;
    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original,
            parsed_filters: filter,
        },
    }))
}

/// DELETE /strings/{value}
pub async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> ApiResult<StatusCode> {
    remove_string(&state, &value).await
}

/// DELETE /strings/filter-by-natural-language
///
/// The static segment shadows the `{value}` capture, so a stored string
/// with exactly this text is deleted here.
pub async fn delete_natural_language_literal(
    State(state): State<AppState>,
) -> ApiResult<StatusCode> {
    remove_string(&state, NATURAL_LANGUAGE_SEGMENT).await
}

async fn remove_string(state: &AppState, value: &str) -> ApiResult<StatusCode> {
    let id = content_hash(value);
    state.store.delete_by_id(&id).await?;
    StringDeleted { id: &id }.log();
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        store: state.store.name().to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Fallback for a known route called with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("Method {} not allowed on {}", method, uri.path()))
}

/// Fallback for unmatched routes.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Route {} not found", uri))
}

fn reject_conflicting(filter: &FilterSpec) -> ApiResult<()> {
    if let (true, Some(min_length), Some(max_length)) =
        (filter.has_conflict(), filter.min_length, filter.max_length)
    {
        FilterConflict {
            min_length,
            max_length,
        }
        .log();
        return Err(ApiError::Unprocessable("Conflicting filters".to_string()));
    }
    Ok(())
}

fn missing_value() -> ApiError {
    ApiError::BadRequest("Invalid request body or missing \"value\" field".to_string())
}

fn string_not_found() -> ApiError {
    ApiError::NotFound("String does not exist".to_string())
}
