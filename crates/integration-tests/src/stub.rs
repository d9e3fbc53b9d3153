//! In-process stand-in for the hosted data service.
//!
//! Speaks just enough of the service's REST dialect for the backend's
//! datastore client: table endpoints under `rest/v1/`, `eq.` filters,
//! single-object `Accept`, representation-returning mutations, merge
//! upserts, and the error bodies the client maps (`23505`, `PGRST116`).
//! Rows live in memory as JSON objects.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use chrono::{Duration, TimeZone, Utc};
use serde_json::{Value, json};

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// In-memory tables.
#[derive(Debug, Default)]
pub struct StubDb {
    tables: HashMap<String, Vec<Value>>,
    next_id: i64,
}

impl StubDb {
    /// Insert a row verbatim, assigning `id` and `created_at` when absent.
    pub fn insert_row(&mut self, table: &str, mut row: Value) -> Value {
        self.next_id += 1;
        let seq = self.next_id;
        if let Some(object) = row.as_object_mut() {
            object.entry("id").or_insert(json!(seq));
            object.entry("created_at").or_insert(json!(timestamp(seq)));
        }
        self.tables
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        row
    }

    /// All rows of a table.
    #[must_use]
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables.get(table).cloned().unwrap_or_default()
    }
}

/// Shared handle to the stub database.
pub type SharedDb = Arc<Mutex<StubDb>>;

/// Deterministic, strictly increasing timestamps so `created_at.desc`
/// ordering is stable.
fn timestamp(seq: i64) -> String {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single();
    let base = base.unwrap_or_else(Utc::now);
    (base + Duration::seconds(seq)).to_rfc3339()
}

/// Build the stub router over a fresh database.
#[must_use]
pub fn stub_service() -> (Router, SharedDb) {
    let db: SharedDb = Arc::new(Mutex::new(StubDb::default()));
    let router = Router::new()
        .route("/rest/v1/{table}", any(handle))
        .with_state(db.clone());
    (router, db)
}

#[derive(Debug, Clone)]
struct Request {
    select: String,
    filters: Vec<(String, String)>,
    order_desc: Option<String>,
    on_conflict: Option<String>,
    single: bool,
    merge_duplicates: bool,
}

fn parse_request(params: &HashMap<String, String>, headers: &HeaderMap) -> Request {
    let mut filters = Vec::new();
    for (key, value) in params {
        if matches!(key.as_str(), "select" | "order" | "on_conflict") {
            continue;
        }
        if let Some(value) = value.strip_prefix("eq.") {
            filters.push((key.clone(), value.to_string()));
        }
    }

    let order_desc = params
        .get("order")
        .and_then(|order| order.strip_suffix(".desc"))
        .map(ToString::to_string);

    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let prefer = headers
        .get("prefer")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    Request {
        select: params.get("select").cloned().unwrap_or_else(|| "*".into()),
        filters,
        order_desc,
        on_conflict: params.get("on_conflict").cloned(),
        single: accept.contains(SINGLE_OBJECT),
        merge_duplicates: prefer.contains("resolution=merge-duplicates"),
    }
}

fn matches_filters(row: &Value, filters: &[(String, String)]) -> bool {
    filters.iter().all(|(column, expected)| {
        match row.get(column) {
            Some(Value::String(actual)) => actual == expected,
            Some(Value::Number(actual)) => actual.to_string() == *expected,
            _ => false,
        }
    })
}

/// Apply the `select` projection, including the one embed the backend uses
/// (`users(name,email)` on orders).
fn project(db: &StubDb, row: &Value, select: &str) -> Value {
    if select == "*" {
        return row.clone();
    }

    if let Some(embed_start) = select.find(",users(") {
        let mut projected = row.clone();
        let base = &select[..embed_start];
        if base != "*" {
            projected = project(db, row, base);
        }
        let customer = row
            .get("user_id")
            .and_then(|user_id| {
                db.rows("users")
                    .into_iter()
                    .find(|user| user.get("id") == Some(user_id))
            })
            .map_or(Value::Null, |user| {
                json!({ "name": user.get("name"), "email": user.get("email") })
            });
        if let Some(object) = projected.as_object_mut() {
            object.insert("users".to_string(), customer);
        }
        return projected;
    }

    let mut projected = serde_json::Map::new();
    for column in select.split(',') {
        if let Some(value) = row.get(column) {
            projected.insert(column.to_string(), value.clone());
        }
    }
    Value::Object(projected)
}

fn no_rows_error() -> Response {
    (
        StatusCode::NOT_ACCEPTABLE,
        Json(json!({
            "code": "PGRST116",
            "message": "JSON object requested, multiple (or no) rows returned",
        })),
    )
        .into_response()
}

fn respond(rows: Vec<Value>, single: bool, created: bool) -> Response {
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    if single {
        match rows.into_iter().next() {
            Some(row) => (status, Json(row)).into_response(),
            None => no_rows_error(),
        }
    } else {
        (status, Json(Value::Array(rows))).into_response()
    }
}

#[allow(clippy::unused_async)]
async fn handle(
    State(db): State<SharedDb>,
    Path(table): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    method: axum::http::Method,
    raw_body: Bytes,
) -> Response {
    let request = parse_request(&params, &headers);
    let body: Option<Value> = serde_json::from_slice(&raw_body).ok();
    let mut db = db.lock().unwrap_or_else(PoisonError::into_inner);

    match method {
        axum::http::Method::GET => {
            let mut rows: Vec<Value> = db
                .rows(&table)
                .into_iter()
                .filter(|row| matches_filters(row, &request.filters))
                .collect();
            if let Some(column) = &request.order_desc {
                rows.sort_by(|a, b| {
                    let a = a.get(column).and_then(Value::as_str).unwrap_or_default();
                    let b = b.get(column).and_then(Value::as_str).unwrap_or_default();
                    b.cmp(a)
                });
            }
            let rows: Vec<Value> = rows
                .iter()
                .map(|row| project(&db, row, &request.select))
                .collect();
            respond(rows, request.single, false)
        }

        axum::http::Method::POST => {
            let Some(body) = body else {
                return StatusCode::BAD_REQUEST.into_response();
            };

            if request.merge_duplicates {
                let Some(conflict_column) = request.on_conflict else {
                    return StatusCode::BAD_REQUEST.into_response();
                };
                let incoming = match body {
                    Value::Array(rows) => rows,
                    row => vec![row],
                };
                for row in incoming {
                    let key = row.get(&conflict_column).cloned();
                    let position = db
                        .tables
                        .entry(table.clone())
                        .or_default()
                        .iter()
                        .position(|candidate| candidate.get(&conflict_column) == key.as_ref());
                    match position {
                        Some(index) => {
                            if let Some(slot) = db
                                .tables
                                .get_mut(&table)
                                .and_then(|rows| rows.get_mut(index))
                            {
                                *slot = row;
                            }
                        }
                        None => {
                            db.insert_row(&table, row);
                        }
                    }
                }
                return StatusCode::CREATED.into_response();
            }

            // users.email carries a unique constraint
            if table == "users" {
                let email = body.get("email").cloned();
                let duplicate = db
                    .rows("users")
                    .iter()
                    .any(|row| row.get("email") == email.as_ref());
                if duplicate {
                    return (
                        StatusCode::CONFLICT,
                        Json(json!({
                            "code": "23505",
                            "message": "duplicate key value violates unique constraint \"users_email_key\"",
                        })),
                    )
                        .into_response();
                }
            }

            let row = db.insert_row(&table, body);
            let row = project(&db, &row, &request.select);
            respond(vec![row], request.single, true)
        }

        axum::http::Method::PATCH => {
            let Some(body) = body else {
                return StatusCode::BAD_REQUEST.into_response();
            };
            let mut updated = Vec::new();
            if let Some(rows) = db.tables.get_mut(&table) {
                for row in rows.iter_mut() {
                    if matches_filters(row, &request.filters) {
                        if let (Some(target), Some(patch)) = (row.as_object_mut(), body.as_object())
                        {
                            for (key, value) in patch {
                                target.insert(key.clone(), value.clone());
                            }
                        }
                        updated.push(row.clone());
                    }
                }
            }
            respond(updated, request.single, false)
        }

        axum::http::Method::DELETE => {
            let mut deleted = Vec::new();
            if let Some(rows) = db.tables.get_mut(&table) {
                rows.retain(|row| {
                    if matches_filters(row, &request.filters) {
                        deleted.push(row.clone());
                        false
                    } else {
                        true
                    }
                });
            }
            respond(deleted, request.single, false)
        }

        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}
