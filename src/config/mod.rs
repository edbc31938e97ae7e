pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::core::pc_client::DEFAULT_BASE_URL;
#[cfg(feature = "cli")]
use crate::domain::model::DEFAULT_NEIGHBOR_LIMIT;
use crate::domain::model::GraphQueryKind;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_gene_list, validate_positive_number, validate_url, Validate,
};

/// Settings for one remote retrieval run, whichever surface they came from
/// (command line or TOML file).
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub kind: GraphQueryKind,
    pub genes: Vec<String>,
    pub targets: Vec<String>,
    pub limit: u32,
    pub datasources: Vec<String>,
    pub block_size: Option<usize>,
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub output_path: String,
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_gene_list("genes", &self.genes)?;
        if self.kind == GraphQueryKind::PathsFromTo {
            validate_gene_list("targets", &self.targets)?;
        }
        validate_positive_number("limit", self.limit as usize, 1)?;
        if let Some(block_size) = self.block_size {
            validate_positive_number("block_size", block_size, 1)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout as usize, 1)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum KindArg {
    Neighborhood,
    PathsBetween,
    PathsFromTo,
}

#[cfg(feature = "cli")]
impl From<KindArg> for GraphQueryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Neighborhood => GraphQueryKind::Neighborhood,
            KindArg::PathsBetween => GraphQueryKind::PathsBetween,
            KindArg::PathsFromTo => GraphQueryKind::PathsFromTo,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "biopax-fetch")]
#[command(about = "Retrieve BioPAX pathway models from Pathway Commons or local OWL files")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value = "neighborhood")]
    pub kind: KindArg,

    #[arg(long, value_delimiter = ',', help = "HGNC gene symbols to query")]
    pub genes: Vec<String>,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Target gene symbols for paths-from-to queries"
    )]
    pub targets: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_NEIGHBOR_LIMIT)]
    pub limit: u32,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Restrict the query to these datasources; all databases if omitted"
    )]
    pub datasources: Vec<String>,

    #[arg(long, help = "Split paths-between queries into blocks of this size")]
    pub block_size: Option<usize>,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, help = "Process a local BioPAX OWL file instead of querying")]
    pub owl_file: Option<String>,

    #[arg(long, help = "Process a gzipped BioPAX OWL file instead of querying")]
    pub owl_gz: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Load run settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl From<&CliConfig> for RunSettings {
    fn from(cli: &CliConfig) -> Self {
        Self {
            kind: cli.kind.into(),
            genes: cli.genes.clone(),
            targets: cli.targets.clone(),
            limit: cli.limit,
            datasources: cli.datasources.clone(),
            block_size: cli.block_size,
            base_url: cli.base_url.clone(),
            timeout_seconds: None,
            output_path: cli.output_path.clone(),
        }
    }
}
