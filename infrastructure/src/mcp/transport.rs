//! Streamable HTTP transport for MCP.
//!
//! One JSON-RPC request per HTTP POST. The server answers either with a
//! plain JSON body or with a single-event `text/event-stream` body; both
//! are decoded here into [`JsonRpcResponse`]. The `Mcp-Session-Id` header
//! assigned during initialize is captured and echoed on later requests.
//!
//! The transport exposes typed methods only — there is no probing of the
//! response shape beyond the declared content type.

use crate::mcp::error::{McpError, Result};
use crate::mcp::protocol::{JsonRpcNotification, JsonRpcRequest, JsonRpcResponse};
use reqwest::header::CONTENT_TYPE;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// Build the MCP endpoint URL `http://{host}:{port}{path}`.
///
/// The path is normalized to start with `/`; an empty path becomes `/`.
pub fn endpoint_url(host: &str, port: u16, path: &str) -> String {
    let normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    format!("http://{}:{}{}", host, port, normalized)
}

/// HTTP transport carrying JSON-RPC frames to a single MCP endpoint.
pub struct StreamableHttpTransport {
    http: reqwest::Client,
    endpoint: String,
    /// Session id assigned by the server on initialize, echoed afterwards.
    session_id: Mutex<Option<String>>,
}

impl StreamableHttpTransport {
    /// Create a transport for `endpoint` with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(McpError::Client)?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            session_id: Mutex::new(None),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a request and return the JSON-RPC response frame.
    pub async fn request(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse> {
        debug!("-> {} (id {})", request.method, request.id);
        let body = self.post(serde_json::to_value(request)?).await?;

        let frame = match body {
            Some(text) => text,
            None => {
                return Err(McpError::UnexpectedResponse(format!(
                    "empty response body for '{}'",
                    request.method
                )));
            }
        };

        let response: JsonRpcResponse = serde_json::from_str(&frame)?;
        if let Some(error) = &response.error {
            return Err(McpError::Rpc {
                code: error.code,
                message: error.message.clone(),
            });
        }
        Ok(response)
    }

    /// Send a notification. The server acknowledges with an empty body.
    pub async fn notify(&self, notification: &JsonRpcNotification) -> Result<()> {
        debug!("-> {} (notification)", notification.method);
        self.post(serde_json::to_value(notification)?).await?;
        Ok(())
    }

    /// POST one JSON-RPC frame, returning the response body (if any).
    async fn post(&self, payload: serde_json::Value) -> Result<Option<String>> {
        let mut builder = self
            .http
            .post(&self.endpoint)
            .header("Accept", "application/json, text/event-stream")
            .json(&payload);

        // A poisoned lock only means a panicked writer; the stored id is
        // still usable.
        if let Some(session_id) = self
            .session_id
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            builder = builder.header("Mcp-Session-Id", session_id);
        }

        let response = builder.send().await.map_err(|source| McpError::Connection {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        // Capture the session id the server assigns on initialize
        if let Some(value) = response.headers().get("Mcp-Session-Id") {
            if let Ok(id) = value.to_str() {
                *self.session_id.lock().unwrap_or_else(|e| e.into_inner()) = Some(id.to_string());
            }
        }

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let text = response.text().await.map_err(|source| McpError::Connection {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(McpError::UnexpectedResponse(format!(
                "HTTP {} from {}: {}",
                status, self.endpoint, text
            )));
        }

        if text.is_empty() {
            return Ok(None);
        }

        if content_type.starts_with("text/event-stream") {
            return match sse_data(&text) {
                Some(data) => Ok(Some(data)),
                None => Err(McpError::UnexpectedResponse(
                    "event stream contained no data frame".to_string(),
                )),
            };
        }

        Ok(Some(text))
    }
}

/// Extract the payload of the first SSE event in `body`.
///
/// Consecutive `data:` lines of one event are joined with newlines, per the
/// SSE framing rules.
fn sse_data(body: &str) -> Option<String> {
    let mut data_lines = Vec::new();
    for line in body.lines() {
        if let Some(rest) = line.strip_prefix("data:") {
            data_lines.push(rest.strip_prefix(' ').unwrap_or(rest));
        } else if line.is_empty() && !data_lines.is_empty() {
            // Blank line ends the first event
            break;
        }
    }

    if data_lines.is_empty() {
        None
    } else {
        Some(data_lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_with_leading_slash() {
        assert_eq!(
            endpoint_url("127.0.0.1", 8000, "/mcp"),
            "http://127.0.0.1:8000/mcp"
        );
    }

    #[test]
    fn endpoint_url_normalizes_missing_slash() {
        assert_eq!(
            endpoint_url("slice-gw.local", 9100, "mcp"),
            "http://slice-gw.local:9100/mcp"
        );
    }

    #[test]
    fn endpoint_url_empty_path_becomes_root() {
        assert_eq!(endpoint_url("127.0.0.1", 8000, ""), "http://127.0.0.1:8000/");
    }

    #[test]
    fn sse_data_extracts_first_event() {
        let body = "event: message\ndata: {\"id\":1}\n\ndata: {\"id\":2}\n";
        assert_eq!(sse_data(body).unwrap(), "{\"id\":1}");
    }

    #[test]
    fn sse_data_joins_multi_line_event() {
        let body = "data: {\"a\":\ndata: 1}\n\n";
        assert_eq!(sse_data(body).unwrap(), "{\"a\":\n1}");
    }

    #[test]
    fn sse_data_none_without_data_lines() {
        assert!(sse_data("event: ping\n\n").is_none());
    }

    #[tokio::test]
    async fn request_survives_poisoned_session_lock() {
        let transport =
            StreamableHttpTransport::new("http://127.0.0.1:1/mcp", Duration::from_millis(200))
                .unwrap();

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = transport.session_id.lock().unwrap();
            panic!("poison the lock");
        }));
        assert!(transport.session_id.lock().is_err());

        // The request must reach the network layer (and fail there), not
        // panic on the poisoned lock.
        let result = transport
            .request(&JsonRpcRequest::new("tools/list", None))
            .await;
        assert!(matches!(result, Err(McpError::Connection { .. })));
    }
}
