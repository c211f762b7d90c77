// ABOUTME: Engine client for the Docker remote API over a local Unix socket.
// ABOUTME: Exposes the single discovery entry point used by the CLI layer.

mod client;
mod transport;

pub use client::EngineClient;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::identity;
use crate::volume::Volume;

/// Resolve the container identifier when none is supplied, connect to
/// the engine, and fetch the container's volume list.
///
/// Strictly sequential: resolve, connect, one query. An empty or absent
/// identifier means "auto-detect from the calling process's cgroups".
pub async fn discover(
    config: &EngineConfig,
    socket_path: &str,
    container: Option<&str>,
) -> Result<Vec<Volume>> {
    let id = match container {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => identity::detect_container_id()?,
    };

    let client = EngineClient::connect(config, socket_path).await?;
    client.volumes_for(&id).await
}
