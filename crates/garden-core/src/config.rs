use crate::error::{GardenError, Result};
use crate::paths::{self, GardenPaths};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// GardenConfig
// ---------------------------------------------------------------------------

/// Optional `garden.yaml` at the garden root. Paths are relative to the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenConfig {
    #[serde(default = "default_state_file")]
    pub state_file: String,
    #[serde(default = "default_svg_file")]
    pub svg_file: String,
    #[serde(default = "default_markdown_file")]
    pub markdown_file: String,
    #[serde(default = "default_seedlings_dir")]
    pub seedlings_dir: String,
    #[serde(default = "default_weeds_dir")]
    pub weeds_dir: String,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_state_file() -> String {
    paths::LAWN_JSON.to_string()
}

fn default_svg_file() -> String {
    paths::GARDEN_SVG.to_string()
}

fn default_markdown_file() -> String {
    paths::GARDEN_MD.to_string()
}

fn default_seedlings_dir() -> String {
    paths::SEEDLINGS_DIR.to_string()
}

fn default_weeds_dir() -> String {
    paths::WEEDS_DIR.to_string()
}

fn default_title() -> String {
    "The Silly Garden".to_string()
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            svg_file: default_svg_file(),
            markdown_file: default_markdown_file(),
            seedlings_dir: default_seedlings_dir(),
            weeds_dir: default_weeds_dir(),
            title: default_title(),
        }
    }
}

impl GardenConfig {
    /// Load `garden.yaml` from `root`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        let Some(data) = crate::io::read_if_exists(&path)? else {
            tracing::debug!(path = %path.display(), "no garden config, using defaults");
            return Ok(Self::default());
        };
        // An empty file deserializes to unit, not a mapping.
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: GardenConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn paths(&self, root: &Path) -> GardenPaths {
        GardenPaths {
            root: root.to_path_buf(),
            state: root.join(&self.state_file),
            svg: root.join(&self.svg_file),
            markdown: root.join(&self.markdown_file),
            seedlings: root.join(&self.seedlings_dir),
            weeds: root.join(&self.weeds_dir),
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Refuse configs with errors; log the rest.
    pub fn check(&self) -> Result<()> {
        let mut errors = Vec::new();
        for w in self.validate() {
            match w.level {
                WarnLevel::Warning => tracing::warn!("{}", w.message),
                WarnLevel::Error => errors.push(w.message),
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(GardenError::InvalidConfig(errors.join("; ")))
        }
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let entries = [
            ("state_file", &self.state_file),
            ("svg_file", &self.svg_file),
            ("markdown_file", &self.markdown_file),
            ("seedlings_dir", &self.seedlings_dir),
            ("weeds_dir", &self.weeds_dir),
        ];

        // 1. No empty paths
        for (key, value) in &entries {
            if value.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("{key} must not be empty"),
                });
            }
        }

        // 2. Absolute paths escape the garden root
        for (key, value) in &entries {
            if Path::new(value.as_str()).is_absolute() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("{key} '{value}' is absolute; it will not move with the repo"),
                });
            }
        }

        // 3. Outputs must not clobber each other
        for (i, (key_a, a)) in entries.iter().enumerate() {
            for (key_b, b) in &entries[i + 1..] {
                if !a.trim().is_empty() && normalize(a) == normalize(b) {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Error,
                        message: format!("{key_a} and {key_b} both point at '{a}'"),
                    });
                }
            }
        }

        if self.title.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "title is empty; garden page will have a blank heading".to_string(),
            });
        }

        warnings
    }
}

fn normalize(p: &str) -> PathBuf {
    Path::new(p.trim()).components().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
