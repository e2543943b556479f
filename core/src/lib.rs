//! Minimal HTTP request abstraction.
//!
//! # Overview
//! A `Request` carries a URL, method, optional headers and an optional
//! serializable body. `execute` builds the wire request, sends it through an
//! injected `Transport`, classifies the status code into `NetworkError` and
//! decodes the body into the caller's type.
//!
//! # Design
//! - `Transport` is the only I/O seam. Production code uses
//!   `ReqwestTransport`; tests use a fake that records the outbound request.
//! - Transport failures are returned unchanged in `ExecuteError::Transport`.
//!   Everything this crate decides itself is a `NetworkError`.
//! - Bodies go through a `Codec`; `JsonCodec` is the default.
//! - No retries, timeouts or caching are layered on top of the transport.

pub mod codec;
pub mod error;
pub mod http;
pub mod request;
pub mod transport;

pub use codec::{Codec, CodecError, JsonCodec};
pub use error::{ExecuteError, NetworkError};
pub use http::{Headers, HttpMethod, HttpRequest, HttpResponse, RawResponse, ResponseMetadata};
pub use request::Request;
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use transport::{Transport, TransportObserver};
