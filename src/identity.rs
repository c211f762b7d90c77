// ABOUTME: Container identifier auto-detection from cgroup membership.
// ABOUTME: Extracts the engine-assigned 64-hex token from /proc/self/cgroup.

use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};

const CGROUP_RECORD: &str = "/proc/self/cgroup";

/// Recover the calling container's identifier from the process's own
/// control-group record.
pub fn detect_container_id() -> Result<String> {
    scan_record(Path::new(CGROUP_RECORD))
}

/// Scan a cgroup record line by line for a contiguous 64-character
/// lowercase-hex token and return the first match.
///
/// The cgroup line format varies across engine versions and cgroup
/// drivers, so the identifier is matched as a fixed-length hex token
/// rather than parsed out of the hierarchy path structurally.
fn scan_record(path: &Path) -> Result<String> {
    let record = std::fs::read_to_string(path).map_err(|e| Error::Resolution {
        reason: format!("cannot read {}: {}", path.display(), e),
    })?;

    let id_pattern = Regex::new("[a-f0-9]{64}").expect("container id pattern compiles");

    record
        .lines()
        .find_map(|line| id_pattern.find(line))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::Resolution {
            reason: "no container id in cgroup record".to_string(),
        })
}
