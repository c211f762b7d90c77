// ABOUTME: Rendering of volume listings for the CLI.
// ABOUTME: Supports plain, detailed, and JSON output modes.

use crate::volume::Volume;

/// Output mode for the volume listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One mount path per line.
    Plain,
    /// Count header, then a writability flag and path per line.
    Detailed,
    /// JSON array of {path, writable} objects.
    Json,
}

/// Render the volume list in the requested mode, without a trailing
/// newline.
pub fn render(volumes: &[Volume], mode: OutputMode) -> String {
    match mode {
        OutputMode::Plain => volumes
            .iter()
            .map(|v| v.path.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Detailed => {
            let mut lines = vec![format!("{} volume(s)", volumes.len())];
            for v in volumes {
                let w = if v.writable { "w" } else { "" };
                lines.push(format!("r{}  {}", w, v.path));
            }
            lines.join("\n")
        }
        OutputMode::Json => {
            serde_json::to_string(volumes).expect("volumes serialize to JSON")
        }
    }
}
