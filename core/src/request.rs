//! A single HTTP call: build, send, classify, decode.
//!
//! # Design
//! `Request` holds only its URL, method, headers and body, and nothing
//! mutates after construction. `execute` borrows it immutably and owns no
//! connection state, so each call is independent. The transport and codec are
//! passed in per call; the defaults are JSON and no observer.
//!
//! The pipeline is linear and stops at the first failure:
//! build wire request -> transport -> metadata check -> status check -> decode.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use crate::codec::{Codec, JsonCodec};
use crate::error::{ExecuteError, NetworkError};
use crate::http::{Headers, HttpMethod, HttpRequest, RawResponse};
use crate::transport::{Transport, TransportObserver};

/// An HTTP request with an optional serializable body of type `B`.
///
/// A request without a body has `B = ()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Request<B = ()> {
    url: Url,
    method: HttpMethod,
    headers: Option<Headers>,
    body: Option<B>,
}

impl Request<()> {
    pub fn new(url: Url, method: HttpMethod) -> Self {
        Self {
            url,
            method,
            headers: None,
            body: None,
        }
    }

    /// Parse `url` and create a request.
    ///
    /// Fails with `NetworkError::InvalidUrl` carrying the input when it is
    /// not an absolute URL.
    pub fn parse(url: &str, method: HttpMethod) -> Result<Self, NetworkError> {
        let parsed = Url::parse(url).map_err(|e| {
            debug!(url, error = %e, "rejecting request url");
            NetworkError::InvalidUrl(url.to_string())
        })?;
        Ok(Self::new(parsed, method))
    }
}

impl<B> Request<B> {
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Replace the body, changing the body type.
    pub fn with_body<B2>(self, body: B2) -> Request<B2> {
        Request {
            url: self.url,
            method: self.method,
            headers: self.headers,
            body: Some(body),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    pub fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }
}

impl<B> Request<B>
where
    B: Serialize,
{
    /// Build the outbound request handed to the transport.
    ///
    /// Headers are copied verbatim; nothing is added. A body that fails to
    /// serialize yields `NetworkError::Unknown` with the serializer message.
    pub fn wire_request<C: Codec>(&self, codec: &C) -> Result<HttpRequest, NetworkError> {
        let body = match &self.body {
            Some(body) => Some(codec.encode(body).map_err(|e| {
                debug!(error = %e, "request body failed to serialize");
                NetworkError::Unknown(e.to_string())
            })?),
            None => None,
        };

        Ok(HttpRequest {
            method: self.method,
            url: self.url.clone(),
            headers: self.headers.clone().unwrap_or_default(),
            body,
        })
    }

    /// Send the request and decode the body as JSON into `T`.
    pub async fn execute<T, R>(&self, transport: &R) -> Result<T, ExecuteError<R::Error>>
    where
        T: DeserializeOwned,
        R: Transport + ?Sized,
    {
        self.execute_with(transport, &JsonCodec, None).await
    }

    /// Send the request and only check the status; the body is ignored.
    pub async fn execute_empty<R>(&self, transport: &R) -> Result<(), ExecuteError<R::Error>>
    where
        R: Transport + ?Sized,
    {
        self.execute_empty_with(transport, &JsonCodec, None).await
    }

    /// Like `execute`, with an explicit codec and observer.
    pub async fn execute_with<T, R, C>(
        &self,
        transport: &R,
        codec: &C,
        observer: Option<Arc<dyn TransportObserver>>,
    ) -> Result<T, ExecuteError<R::Error>>
    where
        T: DeserializeOwned,
        R: Transport + ?Sized,
        C: Codec,
    {
        let response = self.dispatch(transport, codec, observer).await?;
        codec.decode(&response.body).map_err(|e| {
            debug!(error = %e, bytes = response.body.len(), "response body failed to decode");
            ExecuteError::Network(NetworkError::Decode)
        })
    }

    /// Like `execute_empty`, with an explicit codec and observer.
    pub async fn execute_empty_with<R, C>(
        &self,
        transport: &R,
        codec: &C,
        observer: Option<Arc<dyn TransportObserver>>,
    ) -> Result<(), ExecuteError<R::Error>>
    where
        R: Transport + ?Sized,
        C: Codec,
    {
        self.dispatch(transport, codec, observer).await.map(|_| ())
    }

    /// Everything up to and including the status check.
    async fn dispatch<R, C>(
        &self,
        transport: &R,
        codec: &C,
        observer: Option<Arc<dyn TransportObserver>>,
    ) -> Result<RawResponse, ExecuteError<R::Error>>
    where
        R: Transport + ?Sized,
        C: Codec,
    {
        let request = self.wire_request(codec)?;
        debug!(method = %request.method, url = %request.url, "sending request");
        trace!(bytes = request.body.as_ref().map_or(0, Vec::len), "request body");

        let response = transport
            .send(request, observer)
            .await
            .map_err(ExecuteError::Transport)?;

        let status = match response.http_response() {
            Some(http) => http.status,
            None => {
                debug!("transport returned a non-HTTP response");
                return Err(NetworkError::NoResponse.into());
            }
        };
        debug!(status, "response received");
        trace!(bytes = response.body.len(), "response body");

        NetworkError::from_status(status)?;
        Ok(response)
    }
}
