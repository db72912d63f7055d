use crate::inspector::InspectorLimits;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub tool: ToolConfig,

    #[serde(default)]
    pub limits: InspectorLimits,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Manifest to load when a command is not given one explicitly
    #[serde(default)]
    pub manifest: Option<PathBuf>,

    /// Directory to rebase catalog paths onto
    #[serde(default)]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolConfig {
    /// Endpoint URL of the external re-encode tool's web UI
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}
