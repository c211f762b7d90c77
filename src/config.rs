// ABOUTME: Engine connection configuration.
// ABOUTME: Holds the supported API revision and the default socket location.

/// Remote API revision this client is built against.
pub const API_VERSION: &str = "v1.14";

/// The engine's default local control socket.
pub const DEFAULT_SOCKET: &str = "/var/run/docker.sock";

/// Configuration handed into `EngineClient::connect`, built once at
/// startup instead of living as process-wide state.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// API path prefix used for every request.
    pub api_version: String,
    /// Socket dialled when no override is given.
    pub default_socket_path: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            default_socket_path: DEFAULT_SOCKET.to_string(),
        }
    }
}
