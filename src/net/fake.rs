//! Scripted transport for tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use super::http::{HttpClient, HttpRequest, HttpResponse, Method, Transport};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::state::session::{MemoryStorage, Session};

pub const FAKE_BASE: &str = "http://test.local";

/// Routes `(method, path)` to queued responses and records every request.
/// The last queued response for a route is reused once the queue drains.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Rc<RefCell<FakeInner>>,
}

#[derive(Default)]
struct FakeInner {
    routes: HashMap<(Method, String), VecDeque<HttpResponse>>,
    requests: Vec<HttpRequest>,
}

impl FakeTransport {
    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.inner
            .borrow_mut()
            .routes
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(HttpResponse { status, body: body.to_owned() });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.inner
            .borrow()
            .requests
            .iter()
            .map(|r| format!("{} {}", r.method, r.url.trim_start_matches(FAKE_BASE)))
            .collect()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut inner = self.inner.borrow_mut();
        let path = request.url.trim_start_matches(FAKE_BASE).to_owned();
        let key = (request.method, path.clone());
        inner.requests.push(request);
        let Some(queue) = inner.routes.get_mut(&key) else {
            return Err(ClientError::Transport(format!("no route for {} {path}", key.0)));
        };
        let response = if queue.len() > 1 { queue.pop_front() } else { queue.front().cloned() };
        response.ok_or_else(|| ClientError::Transport(format!("no response for {} {path}", key.0)))
    }
}

/// Client wired to a fresh [`FakeTransport`] and in-memory token storage.
pub fn fake_client(token: Option<&str>) -> (HttpClient<FakeTransport>, FakeTransport) {
    let storage = MemoryStorage::default();
    let session = Session::new(Rc::new(storage));
    if let Some(token) = token {
        session.sign_in(token);
    }
    let transport = FakeTransport::default();
    let client = HttpClient::new(ClientConfig::with_api_base(FAKE_BASE), session, transport.clone());
    (client, transport)
}
