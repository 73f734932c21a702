//! In-memory stand-in for the REST API, used by unit tests

use async_trait::async_trait;
use contracts::shared::api_error::ApiError;
use serde_json::{json, Map, Value};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use super::{ApiRequest, Method, Transport};

#[derive(Default)]
struct State {
    collections: BTreeMap<String, Vec<Value>>,
    next_id: i64,
    requests: Vec<ApiRequest>,
    failures: VecDeque<ApiError>,
    delete_reply: Option<Value>,
}

/// Records every request and answers it from per-collection JSON arrays
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Rc<RefCell<State>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record as if it had been created earlier; returns its id
    pub fn seed(&self, collection: &str, mut record: Value) -> i64 {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        record["id"] = json!(id);
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
        id
    }

    /// Make the next request fail with `err` without touching the data
    pub fn fail_next(&self, err: ApiError) {
        self.state.borrow_mut().failures.push_back(err);
    }

    /// Answer successful deletes with `body` instead of an empty response
    pub fn reply_to_deletes_with(&self, body: Value) {
        self.state.borrow_mut().delete_reply = Some(body);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    /// Requests other than plain reads
    pub fn mutations(&self) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method != Method::Get)
            .collect()
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.state
            .borrow()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn handle(&self, request: &ApiRequest) -> Result<Option<Value>, ApiError> {
        let mut state = self.state.borrow_mut();
        let segments: Vec<String> = request
            .path
            .trim_start_matches('/')
            .split('/')
            .map(|s| urlencoding::decode(s).map(|c| c.into_owned()).unwrap_or_default())
            .collect();
        let collection = segments.first().cloned().unwrap_or_default();
        let rest: Vec<&str> = segments.iter().skip(1).map(String::as_str).collect();

        let not_found = || {
            ApiError::http(404, json!({ "message": format!("Not found: {}", request.path) }))
        };

        match (request.method, rest.as_slice()) {
            (Method::Get, []) => Ok(Some(Value::Array(
                state.collections.get(&collection).cloned().unwrap_or_default(),
            ))),
            (Method::Get, ["search"]) => {
                let keyword = request
                    .query
                    .iter()
                    .find(|(k, _)| k == "keyword")
                    .map(|(_, v)| v.to_lowercase())
                    .unwrap_or_default();
                Ok(Some(filter(&state, &collection, |r| {
                    r["name"].as_str().unwrap_or("").to_lowercase().contains(&keyword)
                })))
            }
            (Method::Get, [field, value]) => {
                let (field, value) = (field.to_string(), value.to_string());
                let found = filter(&state, &collection, |r| r[&field] == json!(value));
                if field == "email" {
                    // single-record lookup
                    return found
                        .as_array()
                        .and_then(|a| a.first().cloned())
                        .map(Some)
                        .ok_or_else(not_found);
                }
                Ok(Some(found))
            }
            (Method::Get, [id]) => find(&state, &collection, id).map(Some).ok_or_else(not_found),
            (Method::Post, []) => {
                state.next_id += 1;
                let id = state.next_id;
                let mut record = body_or_empty(request);
                record["id"] = json!(id);
                state
                    .collections
                    .entry(collection)
                    .or_default()
                    .push(record.clone());
                Ok(Some(record))
            }
            (Method::Put, [id]) => {
                let id_num: i64 = id.parse().map_err(|_| not_found())?;
                let items = state.collections.entry(collection).or_default();
                let slot = items
                    .iter_mut()
                    .find(|r| r["id"] == json!(id_num))
                    .ok_or_else(not_found)?;
                let mut record = body_or_empty(request);
                record["id"] = json!(id_num);
                *slot = record.clone();
                Ok(Some(record))
            }
            (Method::Delete, [id]) => {
                let id_num: i64 = id.parse().map_err(|_| not_found())?;
                let items = state.collections.entry(collection).or_default();
                let before = items.len();
                items.retain(|r| r["id"] != json!(id_num));
                if items.len() == before {
                    return Err(not_found());
                }
                Ok(state.delete_reply.clone())
            }
            _ => Err(not_found()),
        }
    }
}

fn body_or_empty(request: &ApiRequest) -> Value {
    request
        .body
        .clone()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

fn find(state: &State, collection: &str, id: &str) -> Option<Value> {
    let id: i64 = id.parse().ok()?;
    state
        .collections
        .get(collection)?
        .iter()
        .find(|r| r["id"] == json!(id))
        .cloned()
}

fn filter(state: &State, collection: &str, pred: impl Fn(&Value) -> bool) -> Value {
    Value::Array(
        state
            .collections
            .get(collection)
            .map(|items| items.iter().filter(|r| pred(r)).cloned().collect())
            .unwrap_or_default(),
    )
}

#[async_trait(?Send)]
impl Transport for FakeApi {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        self.state.borrow_mut().requests.push(request.clone());
        let failure = self.state.borrow_mut().failures.pop_front();
        if let Some(err) = failure {
            return Err(err);
        }
        self.handle(&request)
    }
}
