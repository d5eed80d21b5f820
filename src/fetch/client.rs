//! HTTP transport abstraction.
//!
//! The resolver only needs "GET this URL, follow redirects, give me the
//! status, headers, final URL and body". [`HttpClient`] is that seam;
//! [`ReqwestClient`] is the production implementation.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;

use crate::config::ResolverConfig;
use crate::error_handling::{FetchError, InitializationError};
use crate::initialization::init_client;

/// A completed HTTP response, fully buffered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers, names lower-cased; the first value wins for repeated names
    pub headers: HashMap<String, String>,
    /// URL after all redirects were followed
    pub final_url: String,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Raw body bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// `true` for statuses in [200, 299].
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// GET capability the resolver drives.
///
/// Implementations follow redirects (up to their own cap), enforce their own
/// timeout, and report every transport failure as a [`FetchError`] value.
/// Non-2xx statuses are *not* errors; they come back as a normal response.
pub trait HttpClient: Send + Sync {
    /// Fetches `url`, following redirects.
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, FetchError>> + Send;
}

impl<T: HttpClient> HttpClient for Arc<T> {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, FetchError>> + Send {
        (**self).get(url)
    }
}

/// [`HttpClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Arc<reqwest::Client>,
    timeout: Duration,
    max_body_bytes: usize,
}

impl ReqwestClient {
    /// Builds a client with the redirect cap, timeout and User-Agent from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the TLS backend
    /// cannot be initialized.
    pub fn new(config: &ResolverConfig) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::from_client(client, config.timeout, config.max_body_bytes))
    }

    /// Wraps an existing `reqwest::Client`.
    ///
    /// `timeout` is enforced on top of whatever the client itself is
    /// configured with. Bodies longer than `max_body_bytes` fail with
    /// [`FetchError::Body`].
    pub fn from_client(
        client: Arc<reqwest::Client>,
        timeout: Duration,
        max_body_bytes: usize,
    ) -> Self {
        Self {
            client,
            timeout,
            max_body_bytes,
        }
    }

    async fn send(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.as_str().to_string())
                    .or_insert_with(|| value.to_string());
            }
        }

        // Stream with size cap so an oversized page or icon is never buffered whole
        let mut stream = response.bytes_stream();
        let mut body = Vec::with_capacity(self.max_body_bytes.min(16 * 1024));
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(FetchError::Body(format!(
                    "{url} exceeds the {} byte body limit",
                    self.max_body_bytes
                )));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(HttpResponse {
            status,
            headers,
            final_url,
            body,
        })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, FetchError>> + Send {
        async move {
            match tokio::time::timeout(self.timeout, self.send(url)).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout(format!(
                    "{url} did not respond within {}ms",
                    self.timeout.as_millis()
                ))),
            }
        }
    }
}
