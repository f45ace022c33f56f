//! transport::http
//!
//! reqwest-backed [`Transport`] implementation.
//!
//! # Design
//!
//! A thin mapping layer: verb, IRI, headers and body go in as given, the
//! full response comes back buffered. No retries and no caching; policy
//! belongs to the store or above it.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::traits::{Method, Transport, TransportError, TransportRequest, TransportResponse};

/// HTTP transport over a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a default client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport around an existing client.
    ///
    /// Use this to share connection pools or to carry client-level
    /// configuration (proxies, TLS, timeouts) into the store.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), &request.iri);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?
            .to_vec();

        debug!(method = %request.method, iri = %request.iri, status, "request completed");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
