// ABOUTME: Application-wide error types for lsdvol.
// ABOUTME: Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Every failure the core can produce. All kinds are terminal for a
/// single invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured socket path is missing or does not name a socket.
    #[error("invalid socket path {path}: {reason}")]
    Configuration { path: String, reason: String },

    /// The engine does not answer the info probe with a 200.
    #[error("engine is not compatible with remote API version {version}")]
    Compatibility { version: String },

    /// Connection or I/O failure talking to the socket.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The engine answered, but not with the expected metadata shape.
    #[error("unexpected engine response: {0}")]
    Protocol(String),

    /// The engine knows no container by this identifier.
    #[error("no container with id {id} was found")]
    NotFound { id: String },

    /// The calling container's identifier could not be auto-detected.
    #[error("unable to determine running container id: {reason}")]
    Resolution { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
