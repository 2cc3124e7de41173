//! Compositor configuration.
//!
//! Reads `compositor.toml`. A missing file yields the defaults: namespace
//! `captcha` and a single `item`/`book` carrier.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builder::DEFAULT_NAMESPACE;
use crate::error::CompositorError;
use crate::key::is_namespace_char;

pub const DEFAULT_CONFIG_FILE: &str = "compositor.toml";

/// The physical item whose appearance is reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carrier {
    #[serde(default = "default_kind")]
    pub kind: String,

    #[serde(default = "default_material")]
    pub material: String,
}

impl Default for Carrier {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            material: default_material(),
        }
    }
}

impl Carrier {
    pub fn new(kind: impl Into<String>, material: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            material: material.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositorConfig {
    /// Namespace for case tags and the static card models.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Root of the generated pack.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Registry report to read identifiers from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    #[serde(default)]
    pub pretty: bool,

    #[serde(rename = "carrier", default = "default_carriers")]
    pub carriers: Vec<Carrier>,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            output_dir: default_output_dir(),
            catalog: None,
            pretty: false,
            carriers: default_carriers(),
        }
    }
}

impl CompositorConfig {
    /// Load config from disk, or return default if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, CompositorError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| CompositorError::io(path, e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, CompositorError> {
        let config: CompositorConfig =
            toml::from_str(content).map_err(|e| CompositorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CompositorError> {
        if self.namespace.is_empty() {
            return Err(CompositorError::Config("namespace is empty".to_string()));
        }
        if !self.namespace.chars().all(is_namespace_char) {
            return Err(CompositorError::Config(format!(
                "namespace {:?} may only contain [a-z0-9_.-]",
                self.namespace
            )));
        }
        if self.carriers.is_empty() {
            return Err(CompositorError::Config("no carriers configured".to_string()));
        }
        for carrier in &self.carriers {
            if carrier.kind.is_empty() || carrier.material.is_empty() {
                return Err(CompositorError::Config(format!(
                    "carrier kind and material must be set (got {:?}/{:?})",
                    carrier.kind, carrier.material
                )));
            }
        }
        Ok(())
    }
}

fn default_kind() -> String {
    "item".to_string()
}

fn default_material() -> String {
    "book".to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build/generated/pack")
}

fn default_carriers() -> Vec<Carrier> {
    vec![Carrier::default()]
}
