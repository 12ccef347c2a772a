// In-process stand-in for the back-office REST API.
//
// Keeps records as raw JSON per resource, in insertion order, and remembers
// every request so tests can check what actually went over the wire.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use gatewaybos::{ApiClient, ApiConfig, BackOffice};
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct BackendState {
    records: Mutex<HashMap<String, Vec<Value>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    ignore_paging: AtomicBool,
    list_failure: AtomicU16,
}

pub struct FakeBackend {
    pub base_url: String,
    state: web::Data<BackendState>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();

        let state = web::Data::new(BackendState::default());
        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .route("/api/{resource}", web::get().to(list_records))
                .route("/api/{resource}", web::post().to(create_record))
                .route("/api/{resource}/{id}", web::get().to(get_record))
                .route("/api/{resource}/{id}", web::put().to(update_record))
                .route("/api/{resource}/{id}", web::patch().to(patch_record))
                .route("/api/{resource}/{id}", web::delete().to(delete_record))
        })
        .workers(1)
        .listen(listener)
        .expect("Failed to listen")
        .run();
        tokio::spawn(server);

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            state,
        }
    }

    pub fn back_office(&self) -> BackOffice {
        let config = ApiConfig::new(&self.base_url).expect("valid base url");
        BackOffice::new(ApiClient::new(config).expect("client")).expect("gateways")
    }

    pub fn seed(&self, resource: &str, record: Value) {
        self.state
            .records
            .lock()
            .unwrap()
            .entry(resource.to_string())
            .or_default()
            .push(record);
    }

    pub fn stored(&self, resource: &str) -> Vec<Value> {
        self.state
            .records
            .lock()
            .unwrap()
            .get(resource)
            .cloned()
            .unwrap_or_default()
    }

    /// Answer every list request with the full collection, as a backend
    /// without paging support does.
    pub fn ignore_paging(&self) {
        self.state.ignore_paging.store(true, Ordering::SeqCst);
    }

    /// Make list requests fail with `status` and an empty body.
    pub fn fail_lists_with(&self, status: u16) {
        self.state.list_failure.store(status, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request reached the backend")
    }
}

/// An address nothing listens on.
pub fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn record(state: &BackendState, req: &HttpRequest, body: &[u8]) -> Option<Value> {
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(body).ok()
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        content_type: req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });
    body
}

fn alert(status: StatusCode, resource: &str, action: &str) -> actix_web::HttpResponseBuilder {
    let mut builder = HttpResponse::build(status);
    builder.insert_header(("X-gatewaybos-alert", format!("gatewaybosApp.{resource}.{action}")));
    builder
}

fn bad_request(reason: &str) -> HttpResponse {
    HttpResponse::BadRequest()
        .insert_header(("X-gatewaybos-error", format!("error.{reason}")))
        .finish()
}

fn id_of(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

async fn list_records(
    state: web::Data<BackendState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<Vec<(String, String)>>,
) -> HttpResponse {
    record(&state, &req, &[]);
    let failure = state.list_failure.load(Ordering::SeqCst);
    if failure != 0 {
        let status = StatusCode::from_u16(failure).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return HttpResponse::build(status).finish();
    }

    let resource = path.into_inner();
    let records = state
        .records
        .lock()
        .unwrap()
        .get(&resource)
        .cloned()
        .unwrap_or_default();
    if state.ignore_paging.load(Ordering::SeqCst) {
        return HttpResponse::Ok().json(records);
    }

    let param = |name: &str| -> Option<usize> {
        query
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.parse().ok())
    };
    let page = match (param("page"), param("size")) {
        (Some(page), Some(size)) => records.into_iter().skip(page * size).take(size).collect(),
        _ => records,
    };
    HttpResponse::Ok().json(page)
}

async fn create_record(
    state: web::Data<BackendState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> HttpResponse {
    let resource = path.into_inner();
    let Some(mut new_record) = record(&state, &req, &body) else {
        return bad_request("invalidbody");
    };
    if id_of(&new_record).is_some() {
        return bad_request("idexists");
    }

    new_record["id"] = Value::String(uuid::Uuid::new_v4().to_string());
    state
        .records
        .lock()
        .unwrap()
        .entry(resource.clone())
        .or_default()
        .push(new_record.clone());

    alert(StatusCode::CREATED, &resource, "created").json(new_record)
}

async fn get_record(
    state: web::Data<BackendState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    record(&state, &req, &[]);
    let (resource, id) = path.into_inner();
    let records = state.records.lock().unwrap();
    match records
        .get(&resource)
        .and_then(|all| all.iter().find(|r| id_of(r) == Some(id.as_str())))
    {
        Some(found) => HttpResponse::Ok().json(found),
        None => HttpResponse::NotFound().finish(),
    }
}

fn checked_update(
    state: &BackendState,
    resource: &str,
    id: &str,
    incoming: Option<Value>,
    merge: bool,
) -> HttpResponse {
    let Some(incoming) = incoming else {
        return bad_request("invalidbody");
    };
    match id_of(&incoming) {
        None => return bad_request("idnull"),
        Some(body_id) if body_id != id => return bad_request("idinvalid"),
        Some(_) => {}
    }

    let mut records = state.records.lock().unwrap();
    let Some(existing) = records
        .get_mut(resource)
        .and_then(|all| all.iter_mut().find(|r| id_of(r) == Some(id)))
    else {
        return bad_request("idnotfound");
    };

    if merge {
        let fields: Map<String, Value> = incoming.as_object().cloned().unwrap_or_default();
        for (key, value) in fields {
            if !value.is_null() {
                existing[key.as_str()] = value;
            }
        }
    } else {
        *existing = incoming;
    }

    alert(StatusCode::OK, resource, "updated").json(existing.clone())
}

async fn update_record(
    state: web::Data<BackendState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
    body: web::Bytes,
) -> HttpResponse {
    let (resource, id) = path.into_inner();
    let incoming = record(&state, &req, &body);
    checked_update(&state, &resource, &id, incoming, false)
}

async fn patch_record(
    state: web::Data<BackendState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
    body: web::Bytes,
) -> HttpResponse {
    let (resource, id) = path.into_inner();
    let incoming = record(&state, &req, &body);
    checked_update(&state, &resource, &id, incoming, true)
}

async fn delete_record(
    state: web::Data<BackendState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    record(&state, &req, &[]);
    let (resource, id) = path.into_inner();
    let mut records = state.records.lock().unwrap();
    let Some(all) = records.get_mut(&resource) else {
        return HttpResponse::NotFound().finish();
    };

    let before = all.len();
    all.retain(|r| id_of(r) != Some(id.as_str()));
    if all.len() == before {
        return HttpResponse::NotFound().finish();
    }

    alert(StatusCode::NO_CONTENT, &resource, "deleted").finish()
}
