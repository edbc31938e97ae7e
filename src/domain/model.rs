use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::utils::error::{BiopaxError, Result};

/// Pathway Commons datasource identifiers searched when a query carries no
/// explicit filter. See https://www.pathwaycommons.org/pc2/datasources
pub const DEFAULT_DATABASES: [&str; 18] = [
    "wp",
    "smpdb",
    "reconx",
    "reactome",
    "psp",
    "pid",
    "panther",
    "netpath",
    "msigdb",
    "mirtarbase",
    "kegg",
    "intact",
    "inoh",
    "humancyc",
    "hprd",
    "drugbank",
    "dip",
    "corum",
];

/// Number of steps a graph query expands around its sources when none is
/// given.
pub const DEFAULT_NEIGHBOR_LIMIT: u32 = 1;

/// A normalized statement extracted from a model. The payload shape is owned
/// by whichever extractor produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub data: HashMap<String, serde_json::Value>,
}

/// A BioPAX entity found by the flat metadata scan: a direct child of the
/// rdf:RDF root carrying an rdf:about or rdf:ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub uri: String,
    pub class_name: String,
    pub display_name: Option<String>,
}

/// An in-memory BioPAX model. The OWL document is kept verbatim for
/// downstream extractors; only cheap metadata is scanned out of it.
#[derive(Debug, Clone)]
pub struct BiopaxModel {
    pub owl: String,
    pub level: Option<String>,
    pub entities: Vec<EntityRef>,
    pub retrieved_at: DateTime<Utc>,
}

impl BiopaxModel {
    /// A model with no BioPAX entities. Pathway Commons answers some empty
    /// result sets with a syntactically valid but entity-free document.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphQueryKind {
    Neighborhood,
    PathsBetween,
    PathsFromTo,
}

impl GraphQueryKind {
    /// The `kind` parameter value of the PC2 graph endpoint.
    pub fn as_param(&self) -> &'static str {
        match self {
            GraphQueryKind::Neighborhood => "neighborhood",
            GraphQueryKind::PathsBetween => "pathsbetween",
            GraphQueryKind::PathsFromTo => "pathsfromto",
        }
    }
}

impl FromStr for GraphQueryKind {
    type Err = BiopaxError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .to_ascii_lowercase()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        match normalized.as_str() {
            "neighborhood" => Ok(GraphQueryKind::Neighborhood),
            "pathsbetween" => Ok(GraphQueryKind::PathsBetween),
            "pathsfromto" => Ok(GraphQueryKind::PathsFromTo),
            _ => Err(BiopaxError::InvalidConfigValueError {
                field: "kind".to_string(),
                value: s.to_string(),
                reason: "Expected neighborhood, pathsbetween or pathsfromto".to_string(),
            }),
        }
    }
}

/// A graph query against the pathway knowledge base. An empty `datasources`
/// list means the query is not restricted and the service searches all
/// databases.
#[derive(Debug, Clone)]
pub struct GraphQuery {
    pub kind: GraphQueryKind,
    pub sources: Vec<String>,
    pub targets: Vec<String>,
    pub limit: u32,
    pub datasources: Vec<String>,
}

impl GraphQuery {
    pub fn neighborhood(sources: Vec<String>, limit: u32, datasources: Vec<String>) -> Self {
        Self {
            kind: GraphQueryKind::Neighborhood,
            sources,
            targets: Vec::new(),
            limit,
            datasources,
        }
    }

    pub fn paths_between(genes: Vec<String>, limit: u32, datasources: Vec<String>) -> Self {
        Self {
            kind: GraphQueryKind::PathsBetween,
            sources: genes,
            targets: Vec::new(),
            limit,
            datasources,
        }
    }

    pub fn paths_from_to(
        sources: Vec<String>,
        targets: Vec<String>,
        limit: u32,
        datasources: Vec<String>,
    ) -> Self {
        Self {
            kind: GraphQueryKind::PathsFromTo,
            sources,
            targets,
            limit,
            datasources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_kind_params() {
        assert_eq!(GraphQueryKind::Neighborhood.as_param(), "neighborhood");
        assert_eq!(GraphQueryKind::PathsBetween.as_param(), "pathsbetween");
        assert_eq!(GraphQueryKind::PathsFromTo.as_param(), "pathsfromto");
    }

    #[test]
    fn test_query_kind_from_str() {
        assert_eq!(
            "neighborhood".parse::<GraphQueryKind>().unwrap(),
            GraphQueryKind::Neighborhood
        );
        assert_eq!(
            "paths-between".parse::<GraphQueryKind>().unwrap(),
            GraphQueryKind::PathsBetween
        );
        assert_eq!(
            "paths_from_to".parse::<GraphQueryKind>().unwrap(),
            GraphQueryKind::PathsFromTo
        );
        assert!("pathway".parse::<GraphQueryKind>().is_err());
    }

    #[test]
    fn test_default_databases_complete() {
        assert_eq!(DEFAULT_DATABASES.len(), 18);
        assert!(DEFAULT_DATABASES.contains(&"reactome"));
        assert!(DEFAULT_DATABASES.contains(&"kegg"));
    }
}
