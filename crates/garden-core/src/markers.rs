use crate::error::Result;
use crate::narrative::Sprout;
use crate::paths::GardenPaths;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::PathBuf;

/// A small text file per PR (seedling) or issue (weed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub path: PathBuf,
    pub body: String,
}

pub fn title(kind: Sprout, id: Option<&str>) -> String {
    let id = id.unwrap_or("x");
    match kind {
        Sprout::Seed => format!("PR #{id} Title"),
        Sprout::Weed => format!("Issue #{id} Title"),
    }
}

pub fn marker(paths: &GardenPaths, kind: Sprout, id: Option<&str>, now: DateTime<Utc>) -> Marker {
    let path = match kind {
        Sprout::Seed => paths.seed_marker(id),
        Sprout::Weed => paths.weed_marker(id),
    };
    let body = format!(
        "{}\n{}\n",
        title(kind, id),
        now.to_rfc3339_opts(SecondsFormat::Micros, true)
    );
    Marker { path, body }
}

/// Write the marker, creating both marker directories if needed. A repeat
/// event for the same identifier overwrites its marker.
pub fn write(paths: &GardenPaths, marker: &Marker) -> Result<()> {
    crate::io::ensure_dir(&paths.seedlings)?;
    crate::io::ensure_dir(&paths.weeds)?;
    crate::io::atomic_write(&marker.path, marker.body.as_bytes())?;
    tracing::info!(path = %marker.path.display(), "marker written");
    Ok(())
}
