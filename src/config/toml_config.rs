use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::RunSettings;
use crate::core::pc_client::DEFAULT_BASE_URL;
use crate::domain::model::{GraphQueryKind, DEFAULT_NEIGHBOR_LIMIT};
use crate::utils::error::Result;

/// Run settings loaded from a TOML file, for scripted retrieval runs.
///
/// ```toml
/// [query]
/// kind = "pathsbetween"
/// genes = ["BRAF", "MAP2K1"]
/// block_size = 30
///
/// [service]
/// base_url = "https://www.pathwaycommons.org/pc2"
/// timeout_seconds = 120
///
/// [output]
/// path = "./output"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub query: QuerySection,
    pub service: Option<ServiceSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySection {
    pub kind: String,
    pub genes: Vec<String>,
    pub targets: Option<Vec<String>>,
    pub limit: Option<u32>,
    pub datasources: Option<Vec<String>>,
    pub block_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn into_settings(self) -> Result<RunSettings> {
        let kind: GraphQueryKind = self.query.kind.parse()?;
        let service = self.service.unwrap_or(ServiceSection {
            base_url: None,
            timeout_seconds: None,
        });
        Ok(RunSettings {
            kind,
            genes: self.query.genes,
            targets: self.query.targets.unwrap_or_default(),
            limit: self.query.limit.unwrap_or(DEFAULT_NEIGHBOR_LIMIT),
            datasources: self.query.datasources.unwrap_or_default(),
            block_size: self.query.block_size,
            base_url: service
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_seconds: service.timeout_seconds,
            output_path: self
                .output
                .and_then(|o| o.path)
                .unwrap_or_else(|| "./output".to_string()),
        })
    }
}
