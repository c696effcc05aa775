//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests are described as plain data: a URL plus structured query pairs.
//! `CatalogClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network; the `HttpTransport` trait is the I/O
//! seam, so tests can script responses without a server. Query values are
//! kept unencoded here — the transport performs percent-encoding when it
//! assembles the final URL.
//!
//! The catalog API is read-only, so only GET is modeled.

use crate::error::CatalogError;

/// A catalog GET request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes an `HttpRequest` and returns the raw response.
///
/// A transport error means the request never produced a response; status
/// interpretation (200 vs anything else) belongs to the parsing layer, so
/// implementations must return 4xx/5xx responses as data, not as `Err`.
pub trait HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, CatalogError>;
}

/// Production transport backed by a blocking `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        // Status codes are data for the parser, not transport errors.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, CatalogError> {
        let mut builder = self.agent.get(&request.url);
        for (key, value) in &request.query {
            builder = builder.query(key, value);
        }
        let mut response = builder
            .call()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
