//! JSON-RPC 2.0 adapter over [`HttpTransport`].
//!
//! Every call is a POST to the fixed `json_rpc` endpoint. The `result` member
//! is returned on success; an `error` member becomes [`Error::Rpc`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::network::JSON_RPC_ENDPOINT;

use super::transport::HttpTransport;

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    method: &'a str,
    params: P,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// JSON-RPC client bound to one service.
#[derive(Debug, Clone)]
pub struct JsonRpc {
    transport: HttpTransport,
    password: Option<String>,
    request_id: Option<String>,
}

impl JsonRpc {
    pub fn new(transport: HttpTransport) -> Self {
        Self {
            transport,
            password: None,
            request_id: None,
        }
    }

    /// Sent as the envelope's `password` member (TurtleService `--rpc-password`).
    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password.filter(|p| !p.is_empty());
        self
    }

    /// Fixed `id` sent with every request; omitted when unset.
    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    pub async fn call<P, R>(&self, method: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        if method.trim().is_empty() {
            return Err(Error::InvalidMethod);
        }

        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.request_id.as_deref(),
            method,
            params,
            password: self.password.as_deref(),
        };

        tracing::debug!(method, "JSON-RPC call");
        let response: JsonRpcResponse = self
            .transport
            .post(JSON_RPC_ENDPOINT, Some(&request))
            .await?;

        let result = unwrap_response(response)?;
        Ok(serde_json::from_value(result)?)
    }

    /// Call with `params: {}`.
    pub async fn call_without_params<R: DeserializeOwned>(&self, method: &str) -> Result<R> {
        self.call(method, serde_json::Map::new()).await
    }
}

fn unwrap_response(response: JsonRpcResponse) -> Result<Value> {
    if let Some(err) = response.error {
        return Err(Error::Rpc {
            code: err.code,
            message: err.message,
        });
    }
    response.result.ok_or(Error::MissingField("result"))
}
