//! HTTP layer: `HttpTransport` (one request per call, pluggable error
//! mapping) and the `JsonRpc` adapter built on it.

pub mod jsonrpc;
pub mod transport;

pub use jsonrpc::JsonRpc;
pub use transport::{ErrorDetail, ErrorMapper, HttpTransport, API_KEY_HEADER};
