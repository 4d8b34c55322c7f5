use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File constants
// ---------------------------------------------------------------------------

pub const LAWN_JSON: &str = "lawn-health.json";
pub const GARDEN_SVG: &str = "garden.svg";
pub const GARDEN_MD: &str = "garden.md";
pub const SEEDLINGS_DIR: &str = "seedlings";
pub const WEEDS_DIR: &str = "weeds";

pub const CONFIG_FILE: &str = "garden.yaml";

// ---------------------------------------------------------------------------
// GardenPaths
// ---------------------------------------------------------------------------

/// Every location a run reads or writes, resolved against the garden root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenPaths {
    pub root: PathBuf,
    pub state: PathBuf,
    pub svg: PathBuf,
    pub markdown: PathBuf,
    pub seedlings: PathBuf,
    pub weeds: PathBuf,
}

impl GardenPaths {
    /// The default layout: everything directly under `root`.
    pub fn at(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            state: root.join(LAWN_JSON),
            svg: root.join(GARDEN_SVG),
            markdown: root.join(GARDEN_MD),
            seedlings: root.join(SEEDLINGS_DIR),
            weeds: root.join(WEEDS_DIR),
        }
    }

    pub fn seed_marker(&self, id: Option<&str>) -> PathBuf {
        self.seedlings.join(format!("seed-{}.txt", id.unwrap_or("x")))
    }

    pub fn weed_marker(&self, id: Option<&str>) -> PathBuf {
        self.weeds.join(format!("weed-{}.txt", id.unwrap_or("x")))
    }

    /// How the markdown page should link to the SVG: relative to the
    /// markdown file's directory when possible, absolute otherwise.
    pub fn svg_link(&self) -> String {
        let md_dir = self.markdown.parent().unwrap_or(Path::new(""));
        match self.svg.strip_prefix(md_dir) {
            Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
            Err(_) => self.svg.to_string_lossy().into_owned(),
        }
    }
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
