//! The I/O seam of the request pipeline.
//!
//! # Design
//! `Transport` takes a prepared `HttpRequest` and asynchronously returns the
//! raw bytes plus response metadata, or fails with its own error type. The
//! pipeline never inspects or wraps that error. Production code uses
//! `ReqwestTransport`; tests substitute a fake that records what it was sent.

use std::fmt::Debug;
use std::sync::Arc;

use crate::http::{HttpRequest, RawResponse};

/// Hook notified by a transport around the network call.
///
/// Both methods default to doing nothing.
pub trait TransportObserver: Send + Sync + Debug {
    fn on_request(&self, _request: &HttpRequest) {}

    fn on_response(&self, _response: &RawResponse) {}
}

/// Performs one HTTP round-trip.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Transport-level failure (DNS, refused connection, TLS, ...).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send `request` and return whatever came back.
    ///
    /// `observer` is `None` unless the caller asked for one.
    async fn send(
        &self,
        request: HttpRequest,
        observer: Option<Arc<dyn TransportObserver>>,
    ) -> Result<RawResponse, Self::Error>;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::http::{Headers, HttpMethod, HttpResponse, ResponseMetadata};

    /// Production transport backed by `reqwest`.
    ///
    /// Timeouts, proxies and TLS settings are whatever the wrapped client was
    /// built with.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Use a preconfigured client.
        pub fn from_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    fn reqwest_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        }
    }

    #[async_trait::async_trait]
    impl Transport for ReqwestTransport {
        type Error = reqwest::Error;

        async fn send(
            &self,
            request: HttpRequest,
            observer: Option<Arc<dyn TransportObserver>>,
        ) -> Result<RawResponse, Self::Error> {
            if let Some(observer) = &observer {
                observer.on_request(&request);
            }

            let mut builder = self
                .client
                .request(reqwest_method(request.method), request.url.as_str());
            for (key, value) in &request.headers {
                builder = builder.header(key, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            // Non-UTF-8 header values are dropped.
            let headers: Headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_string(), v.to_string()))
                })
                .collect();
            let body = response.bytes().await?.to_vec();

            let raw = RawResponse {
                body,
                metadata: ResponseMetadata::Http(HttpResponse { status, headers }),
            };
            if let Some(observer) = &observer {
                observer.on_response(&raw);
            }
            Ok(raw)
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestTransport;
