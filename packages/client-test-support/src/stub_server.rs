//! Stub game server for HTTP-level client tests
//!
//! Serves canned replies keyed by method and path on an ephemeral local
//! port and records every request it receives. Must be started from an
//! actix runtime (`#[actix_web::test]`).

use std::collections::{HashMap, VecDeque};
use std::io;
use std::net::TcpListener;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use parking_lot::Mutex;
use serde_json::{json, Value};

/// One canned reply.
#[derive(Debug, Clone)]
pub struct StubReply {
    status: u16,
    body: Option<String>,
    content_type: &'static str,
}

impl StubReply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body.to_string()),
            content_type: "application/json",
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
            content_type: "text/plain",
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: None,
            content_type: "text/plain",
        }
    }

    fn into_response(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut builder = HttpResponse::build(status);
        match self.body {
            Some(body) => builder.content_type(self.content_type).body(body),
            None => builder.finish(),
        }
    }
}

/// A request as the stub saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

impl RecordedRequest {
    /// Body parsed as JSON, if it is JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

type RouteKey = (String, String);

struct StubState {
    routes: Mutex<HashMap<RouteKey, VecDeque<StubReply>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

#[derive(Default)]
pub struct StubServerBuilder {
    routes: HashMap<RouteKey, VecDeque<StubReply>>,
}

impl StubServerBuilder {
    /// Queue a reply for `method path`. Replies are served in order and the
    /// last one repeats.
    pub fn route(mut self, method: &str, path: &str, reply: StubReply) -> Self {
        self.routes
            .entry((method.to_ascii_uppercase(), path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub async fn start(self) -> io::Result<StubServer> {
        let state = web::Data::new(StubState {
            routes: Mutex::new(self.routes),
            requests: Mutex::new(Vec::new()),
        });

        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .default_service(web::to(dispatch))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))?;

        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, "stub server has no address"))?;

        let running = server.run();
        let handle = running.handle();
        actix_web::rt::spawn(running);

        Ok(StubServer {
            base_url: format!("http://{addr}"),
            handle,
            state,
        })
    }
}

pub struct StubServer {
    base_url: String,
    handle: ServerHandle,
    state: web::Data<StubState>,
}

impl StubServer {
    pub fn builder() -> StubServerBuilder {
        StubServerBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

async fn dispatch(req: HttpRequest, body: web::Bytes, state: web::Data<StubState>) -> HttpResponse {
    let method = req.method().as_str().to_string();
    let path = req.path().to_string();

    state.requests.lock().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let reply = {
        let mut routes = state.routes.lock();
        routes.get_mut(&(method, path)).and_then(|queue| {
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        })
    };

    match reply {
        Some(reply) => reply.into_response(),
        None => HttpResponse::NotFound().json(json!({ "detail": "Not Found" })),
    }
}

/// Base URL of a local port with nothing listening on it.
pub fn unreachable_base_url() -> String {
    let port = TcpListener::bind(("127.0.0.1", 0))
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .unwrap_or(9);
    format!("http://127.0.0.1:{port}")
}
