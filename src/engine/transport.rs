// ABOUTME: HTTP/1.1 transport pinned to a single Unix socket.
// ABOUTME: Opens a fresh connection per request and never dials the network.

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::StatusCode;
use hyper_util::rt::TokioIo;
use tokio::net::UnixStream;

use crate::error::{Error, Result};

/// Dials only the socket it was created with; the nominal authority in
/// request URIs is never resolved.
#[derive(Debug, Clone)]
pub struct UnixTransport {
    socket_path: String,
}

impl UnixTransport {
    pub fn new(socket_path: impl Into<String>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    /// Issue a GET and collect the full response body.
    pub async fn get(&self, uri: &str) -> Result<(StatusCode, Bytes)> {
        let stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|e| Error::Transport(format!("failed to connect to socket: {}", e)))?;

        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(|e| Error::Transport(format!("HTTP handshake failed: {}", e)))?;

        // Spawn connection handler
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::warn!("engine connection error: {}", e);
            }
        });

        let req = hyper::Request::builder()
            .method("GET")
            .uri(uri)
            .header("Host", "docker")
            .body(Empty::<Bytes>::new())
            .map_err(|e| Error::Protocol(format!("failed to build request: {}", e)))?;

        let resp = sender
            .send_request(req)
            .await
            .map_err(|e| Error::Transport(format!("request failed: {}", e)))?;

        let status = resp.status();
        let body = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::Transport(format!("failed to read response: {}", e)))?
            .to_bytes();

        Ok((status, body))
    }
}
