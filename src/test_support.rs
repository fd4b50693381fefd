//! Scripted transport and fixtures shared by controller tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::config::ApiConfig;
use crate::net::api::PetClinicApi;
use crate::net::error::ApiError;
use crate::net::http::{HttpRequest, HttpResponse, HttpTransport};

/// Transport that answers requests from a queue and records what was sent.
///
/// Responses are matched by exact URL first, then by a catch-all queue. An
/// unmatched request fails with a transport error.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<Vec<(String, VecDeque<Result<HttpResponse, ApiError>>)>>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response for `url`.
    pub fn respond(self, url: &str, status: u16, body: serde_json::Value) -> Self {
        self.push(url, Ok(HttpResponse { status, body: body.to_string() }));
        self
    }

    /// Queue a raw-text response for `url`.
    pub fn respond_text(self, url: &str, status: u16, body: &str) -> Self {
        self.push(url, Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    /// Queue a transport failure for `url`.
    pub fn fail(self, url: &str, message: &str) -> Self {
        self.push(url, Err(ApiError::Transport(message.to_owned())));
        self
    }

    fn push(&self, url: &str, outcome: Result<HttpResponse, ApiError>) {
        let mut routes = self.routes.borrow_mut();
        if let Some((_, queue)) = routes.iter_mut().find(|(u, _)| u == url) {
            queue.push_back(outcome);
        } else {
            routes.push((url.to_owned(), VecDeque::from([outcome])));
        }
    }

    /// Requests sent so far, in order.
    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.borrow_mut().push(request.clone());
        let mut routes = self.routes.borrow_mut();
        routes
            .iter_mut()
            .find(|(url, _)| *url == request.url)
            .and_then(|(_, queue)| queue.pop_front())
            .unwrap_or_else(|| Err(ApiError::Transport(format!("no scripted response for {}", request.url))))
    }
}

/// Base URL used by every controller test.
pub const BASE: &str = "http://gateway.test";

pub fn api(transport: MockTransport) -> PetClinicApi<MockTransport> {
    PetClinicApi::new(ApiConfig::new(BASE), transport)
}

pub fn url(path: &str) -> String {
    format!("{BASE}{path}")
}

pub fn owner_json(id: i64, pets: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "firstName": "George",
        "lastName": "Franklin",
        "address": "110 W. Liberty St.",
        "city": "Madison",
        "telephone": "6085551023",
        "pets": pets
    })
}
