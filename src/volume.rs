// ABOUTME: Volume record handed to the output layer.
// ABOUTME: One entry per mount path with its writability flag.

use serde::{Deserialize, Serialize};

/// A filesystem path mounted into a container.
///
/// Paths act as a natural key: the engine's mapping holds at most one
/// entry per distinct path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    /// Absolute path inside the container.
    pub path: String,
    /// True when the mount is read-write.
    pub writable: bool,
}
