//! # Roster Files
//!
//! Load and save the in-memory roster as JSON or YAML, keyed off the
//! file extension.

use std::path::Path;

use anyhow::{bail, Context};

use kayfabe_booking::InMemoryRoster;

/// Load a roster from a `.json`, `.yaml`, or `.yml` file.
pub fn load(path: &Path) -> anyhow::Result<InMemoryRoster> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster file {}", path.display()))?;
    match extension(path)? {
        Format::Json => serde_json::from_str(&contents)
            .with_context(|| format!("parsing JSON roster {}", path.display())),
        Format::Yaml => serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing YAML roster {}", path.display())),
    }
}

/// Save a roster back to the same format the path implies.
pub fn save(path: &Path, roster: &InMemoryRoster) -> anyhow::Result<()> {
    let contents = match extension(path)? {
        Format::Json => serde_json::to_string_pretty(roster)?,
        Format::Yaml => serde_yaml::to_string(roster)?,
    };
    std::fs::write(path, contents)
        .with_context(|| format!("writing roster file {}", path.display()))
}

enum Format {
    Json,
    Yaml,
}

fn extension(path: &Path) -> anyhow::Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        other => bail!("unsupported roster file extension: {other:?}"),
    }
}
