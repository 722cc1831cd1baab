#![allow(dead_code)]

use casdoor_client::{CasdoorClient, Settings};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Mutex;
use wiremock::matchers::{basic_auth, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const ORGANIZATION: &str = "built-in";
pub const APPLICATION: &str = "app-built-in";
pub const CERTIFICATE: &str = include_str!("../fixtures/token_jwt_key.pem");

pub fn settings(server: &MockServer) -> Settings {
    Settings::new(
        server.uri(),
        CLIENT_ID,
        CLIENT_SECRET,
        CERTIFICATE,
        ORGANIZATION,
        APPLICATION,
    )
}

pub fn client(server: &MockServer) -> CasdoorClient {
    CasdoorClient::new(settings(server)).unwrap()
}

pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "status": "ok", "msg": "", "data": data }))
}

/// In memory stand-in for the record endpoints (`get-roles`, `add-role`, ...).
#[derive(Default)]
pub struct FakeBackend {
    records: Mutex<BTreeMap<(String, String), Value>>,
}

impl FakeBackend {
    /// Mounts the backend for every `/api/` request carrying the test credentials.
    pub async fn mount(server: &MockServer) {
        Mock::given(path_regex("^/api/[a-z]+-[a-z]+$"))
            .and(basic_auth(CLIENT_ID, CLIENT_SECRET))
            .respond_with(FakeBackend::default())
            .mount(server)
            .await;
    }
}

impl Respond for FakeBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let action = request.url.path().trim_start_matches("/api/");
        let query: BTreeMap<String, String> = request.url.query_pairs().into_owned().collect();
        let (verb, kind) = match action.split_once('-') {
            Some(parts) => parts,
            None => return ResponseTemplate::new(404),
        };
        let mut records = self.records.lock().unwrap();

        match verb {
            "get" if kind.ends_with('s') => {
                let kind = kind.trim_end_matches('s');
                let owner = query.get("owner").cloned().unwrap_or_default();
                let list: Vec<Value> = records
                    .iter()
                    .filter(|((k, id), _)| k == kind && id.starts_with(&format!("{}/", owner)))
                    .map(|(_, record)| record.clone())
                    .collect();
                ok(Value::Array(list))
            }
            "get" => {
                let id = query.get("id").cloned().unwrap_or_default();
                let record = records
                    .get(&(kind.to_string(), id))
                    .cloned()
                    .unwrap_or(Value::Null);
                ok(record)
            }
            "add" | "update" | "delete" => {
                let record: Value = match serde_json::from_slice(&request.body) {
                    Ok(record) => record,
                    Err(err) => {
                        return ResponseTemplate::new(200)
                            .set_body_json(json!({ "status": "error", "msg": err.to_string() }))
                    }
                };
                let id = query.get("id").cloned().unwrap_or_default();
                let new_id = format!(
                    "{}/{}",
                    record["owner"].as_str().unwrap_or_default(),
                    record["name"].as_str().unwrap_or_default()
                );

                let affected = match verb {
                    "add" => records.insert((kind.to_string(), new_id), record).is_none(),
                    "update" => match records.remove(&(kind.to_string(), id)) {
                        Some(_) => {
                            records.insert((kind.to_string(), new_id), record);
                            true
                        }
                        None => false,
                    },
                    _ => records.remove(&(kind.to_string(), new_id)).is_some(),
                };

                ok(Value::from(if affected { "Affected" } else { "Unaffected" }))
            }
            _ => ResponseTemplate::new(404),
        }
    }
}
