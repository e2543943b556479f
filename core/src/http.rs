//! HTTP wire types shared by the request pipeline and transports.
//!
//! # Design
//! These types describe requests and responses as plain data. `Request`
//! builds an `HttpRequest`, hands it to a `Transport`, and receives a
//! `RawResponse` back. Nothing here performs I/O, which keeps the pipeline
//! testable with a fake transport.
//!
//! All fields use owned types so values can be recorded by fakes and moved
//! across tasks without lifetime concerns.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use url::Url;

/// Header mapping, copied verbatim from `Request` into `HttpRequest`.
pub type Headers = HashMap<String, String>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Delete,
    Get,
    Patch,
    Post,
    Put,
}

impl HttpMethod {
    /// Canonical uppercase token sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Delete => "DELETE",
            HttpMethod::Get => "GET",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not one of the five supported methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported HTTP method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DELETE" => Ok(HttpMethod::Delete),
            "GET" => Ok(HttpMethod::Get),
            "PATCH" => Ok(HttpMethod::Patch),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}

/// A fully prepared outbound request.
///
/// Built by `Request::wire_request`. The transport is responsible for
/// executing it and returning the corresponding `RawResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

/// Status line and headers of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Headers,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Headers::new(),
        }
    }
}

/// Metadata a transport attaches to the bytes it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseMetadata {
    /// A regular HTTP response.
    Http(HttpResponse),
    /// The transport produced a response object that carries no HTTP status,
    /// e.g. a non-HTTP scheme handler.
    Other,
}

/// Bytes and metadata returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub body: Vec<u8>,
    pub metadata: ResponseMetadata,
}

impl RawResponse {
    /// An HTTP response with the given status and body and no headers.
    pub fn http(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            metadata: ResponseMetadata::Http(HttpResponse::new(status)),
        }
    }

    /// A response that cannot be interpreted as HTTP.
    pub fn other(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            metadata: ResponseMetadata::Other,
        }
    }

    /// The HTTP part of the metadata, if there is one.
    pub fn http_response(&self) -> Option<&HttpResponse> {
        match &self.metadata {
            ResponseMetadata::Http(response) => Some(response),
            ResponseMetadata::Other => None,
        }
    }
}
