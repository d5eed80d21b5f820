//! In-memory transport for unit tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use crate::error_handling::FetchError;
use crate::fetch::client::{HttpClient, HttpResponse};

/// Deterministic [`HttpClient`]: answers from a fixed route table and records
/// every requested URL. Unknown URLs fail with `FetchError::Connect`.
#[derive(Debug, Default)]
pub(crate) struct MockClient {
    routes: HashMap<String, Result<HttpResponse, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl MockClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, url: &str, response: HttpResponse) -> Self {
        self.routes.insert(url.to_string(), Ok(response));
        self
    }

    pub(crate) fn fail(mut self, url: &str, error: FetchError) -> Self {
        self.routes.insert(url.to_string(), Err(error));
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, FetchError>> + Send {
        self.requests.lock().unwrap().push(url.to_string());
        let result = self
            .routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Connect(format!("no route for {url}"))));
        async move { result }
    }
}

/// Builds a response with an optional Content-Type.
pub(crate) fn response(
    status: u16,
    final_url: &str,
    content_type: Option<&str>,
    body: &[u8],
) -> HttpResponse {
    let mut headers = HashMap::new();
    if let Some(content_type) = content_type {
        headers.insert("content-type".to_string(), content_type.to_string());
    }
    HttpResponse {
        status,
        headers,
        final_url: final_url.to_string(),
        body: body.to_vec(),
    }
}

/// 200 `text/html` page served at `final_url`.
pub(crate) fn html_page(final_url: &str, html: &str) -> HttpResponse {
    response(200, final_url, Some("text/html; charset=utf-8"), html.as_bytes())
}

/// 200 image response.
pub(crate) fn image(final_url: &str, content_type: &str, bytes: &[u8]) -> HttpResponse {
    response(200, final_url, Some(content_type), bytes)
}
