// ABOUTME: Read-only client for the engine's container metadata API.
// ABOUTME: Validates the socket and the API revision at construction time.

use std::collections::HashMap;
use std::os::unix::fs::FileTypeExt;

use bytes::Bytes;
use hyper::StatusCode;
use serde::Deserialize;

use super::transport::UnixTransport;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::volume::Volume;

/// Container metadata document. Only the read-write volume mapping is
/// decoded; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
struct ContainerDetails {
    #[serde(default, rename = "VolumesRW")]
    volumes_rw: HashMap<String, bool>,
}

/// An established, validated channel to the container engine.
///
/// A value of this type has already confirmed that the socket path names
/// a real socket and that the engine speaks the API revision this client
/// was built against. Partially-initialized clients are never returned.
#[derive(Debug)]
pub struct EngineClient {
    transport: UnixTransport,
    api_version: String,
}

impl EngineClient {
    /// Connect to the engine listening at `socket_path`.
    ///
    /// Fails with `Configuration` when the path is missing or not a
    /// socket (no network I/O is attempted in that case), and with
    /// `Compatibility` when the info probe answers anything but 200.
    pub async fn connect(config: &EngineConfig, socket_path: &str) -> Result<Self> {
        let meta = std::fs::metadata(socket_path).map_err(|e| Error::Configuration {
            path: socket_path.to_string(),
            reason: e.to_string(),
        })?;
        if !meta.file_type().is_socket() {
            return Err(Error::Configuration {
                path: socket_path.to_string(),
                reason: "not a socket".to_string(),
            });
        }

        let client = Self {
            transport: UnixTransport::new(socket_path),
            api_version: config.api_version.clone(),
        };

        tracing::debug!(
            socket = socket_path,
            version = %client.api_version,
            "probing engine"
        );
        let (status, _) = client.get("/info").await?;
        if status != StatusCode::OK {
            return Err(Error::Compatibility {
                version: client.api_version,
            });
        }

        Ok(client)
    }

    async fn get(&self, path: &str) -> Result<(StatusCode, Bytes)> {
        self.transport
            .get(&format!("/{}{}", self.api_version, path))
            .await
    }

    /// Volumes mounted into the container identified by `id`.
    ///
    /// The identifier's form is not validated here; the engine rejects
    /// unknown identifiers with a 404, which maps to `NotFound`. The
    /// returned order follows the engine's mapping iteration and carries
    /// no meaning.
    pub async fn volumes_for(&self, id: &str) -> Result<Vec<Volume>> {
        tracing::debug!(container = id, "querying container metadata");
        let (status, body) = self.get(&format!("/containers/{}/json", id)).await?;

        match status {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                return Err(Error::NotFound { id: id.to_string() });
            }
            other => {
                return Err(Error::Protocol(format!(
                    "unexpected status {} for container {}",
                    other, id
                )));
            }
        }

        let details: ContainerDetails = serde_json::from_slice(&body)
            .map_err(|e| Error::Protocol(format!("undecodable container metadata: {}", e)))?;

        Ok(details
            .volumes_rw
            .into_iter()
            .map(|(path, writable)| Volume { path, writable })
            .collect())
    }
}
