//! HTTP transport used by the backend client.

pub mod http;

pub use http::{HttpTransport, TransportError};
