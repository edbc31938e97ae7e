use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::core::owl;
use crate::domain::model::{BiopaxModel, GraphQuery};
use crate::domain::ports::GraphSource;
use crate::utils::error::{BiopaxError, Result};

pub const DEFAULT_BASE_URL: &str = "https://www.pathwaycommons.org/pc2";

/// Status the PC2 graph endpoint answers with when a query matches nothing.
const STATUS_NO_RESULTS: u16 = 460;

/// Client for the Pathway Commons PC2 graph endpoint.
///
/// https://www.pathwaycommons.org/pc2/#graph
pub struct PathwayCommonsClient {
    client: Client,
    base_url: String,
}

impl PathwayCommonsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl Default for PathwayCommonsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Marshals a graph query into PC2 request parameters. An empty datasource
/// filter emits no `datasource` parameter, which makes the service search
/// all databases.
fn graph_params(query: &GraphQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("kind", query.kind.as_param().to_string())];
    for gene in &query.sources {
        params.push(("source", gene.clone()));
    }
    for gene in &query.targets {
        params.push(("target", gene.clone()));
    }
    params.push(("limit", query.limit.to_string()));
    for datasource in &query.datasources {
        params.push(("datasource", datasource.clone()));
    }
    params.push(("format", "BIOPAX".to_string()));
    params
}

#[async_trait]
impl GraphSource for PathwayCommonsClient {
    async fn fetch(&self, query: &GraphQuery) -> Result<Option<BiopaxModel>> {
        let url = format!("{}/graph", self.base_url);
        let params = graph_params(query);

        tracing::debug!(
            "Sending {} query for {} source gene(s) to {}",
            query.kind.as_param(),
            query.sources.len(),
            url
        );
        let response = self.client.get(&url).query(&params).send().await?;
        let status = response.status();

        if status.as_u16() == STATUS_NO_RESULTS {
            tracing::debug!("Query returned no results (status 460)");
            return Ok(None);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BiopaxError::QueryError {
                status: status.as_u16(),
                message,
            });
        }

        let owl = response.text().await?;
        let model = owl::model_from_owl_str(&owl)?;
        if model.is_empty() {
            tracing::debug!("Query returned an entity-free model, treating as no results");
            return Ok(None);
        }
        Ok(Some(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GraphQueryKind;
    use httpmock::prelude::*;

    const SAMPLE_OWL: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:bp="http://www.biopax.org/release/biopax-level3.owl#">
  <bp:Protein rdf:about="http://pathwaycommons.org/pc2/Protein_braf"/>
</rdf:RDF>"#;

    const EMPTY_OWL: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:bp="http://www.biopax.org/release/biopax-level3.owl#">
</rdf:RDF>"#;

    #[test]
    fn test_graph_params_without_filter_omits_datasource() {
        let query = GraphQuery::neighborhood(vec!["BRAF".to_string()], 1, vec![]);
        let params = graph_params(&query);

        assert!(params.iter().all(|(key, _)| *key != "datasource"));
        assert!(params.contains(&("kind", "neighborhood".to_string())));
        assert!(params.contains(&("source", "BRAF".to_string())));
        assert!(params.contains(&("limit", "1".to_string())));
        assert!(params.contains(&("format", "BIOPAX".to_string())));
    }

    #[test]
    fn test_graph_params_with_filter() {
        let query = GraphQuery::paths_between(
            vec!["BRAF".to_string(), "MAP2K1".to_string()],
            2,
            vec!["reactome".to_string(), "pid".to_string()],
        );
        let params = graph_params(&query);

        let datasources: Vec<&String> = params
            .iter()
            .filter(|(key, _)| *key == "datasource")
            .map(|(_, value)| value)
            .collect();
        assert_eq!(datasources, vec!["reactome", "pid"]);

        let sources: Vec<&String> = params
            .iter()
            .filter(|(key, _)| *key == "source")
            .map(|(_, value)| value)
            .collect();
        assert_eq!(sources, vec!["BRAF", "MAP2K1"]);
    }

    #[test]
    fn test_graph_params_paths_from_to() {
        let query = GraphQuery {
            kind: GraphQueryKind::PathsFromTo,
            sources: vec!["BRAF".to_string()],
            targets: vec!["MAP2K1".to_string(), "MAP2K2".to_string()],
            limit: 1,
            datasources: vec![],
        };
        let params = graph_params(&query);

        assert!(params.contains(&("kind", "pathsfromto".to_string())));
        assert!(params.contains(&("source", "BRAF".to_string())));
        assert!(params.contains(&("target", "MAP2K1".to_string())));
        assert!(params.contains(&("target", "MAP2K2".to_string())));
    }

    #[tokio::test]
    async fn test_fetch_returns_model_on_success() {
        let server = MockServer::start();
        let graph_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/graph")
                .query_param("kind", "neighborhood")
                .query_param("source", "BRAF");
            then.status(200)
                .header("Content-Type", "application/vnd.biopax.rdf+xml")
                .body(SAMPLE_OWL);
        });

        let client = PathwayCommonsClient::new(server.base_url());
        let query = GraphQuery::neighborhood(vec!["BRAF".to_string()], 1, vec![]);
        let model = client.fetch(&query).await.unwrap();

        graph_mock.assert();
        let model = model.unwrap();
        assert_eq!(model.entities.len(), 1);
        assert_eq!(model.level.as_deref(), Some("L3"));
    }

    #[tokio::test]
    async fn test_fetch_no_results_status_maps_to_none() {
        let server = MockServer::start();
        let graph_mock = server.mock(|when, then| {
            when.method(GET).path("/graph");
            then.status(460);
        });

        let client = PathwayCommonsClient::new(server.base_url());
        let query = GraphQuery::neighborhood(vec!["NOSUCHGENE".to_string()], 1, vec![]);
        let model = client.fetch(&query).await.unwrap();

        graph_mock.assert();
        assert!(model.is_none());
    }

    #[tokio::test]
    async fn test_fetch_entity_free_body_maps_to_none() {
        let server = MockServer::start();
        let graph_mock = server.mock(|when, then| {
            when.method(GET).path("/graph");
            then.status(200).body(EMPTY_OWL);
        });

        let client = PathwayCommonsClient::new(server.base_url());
        let query = GraphQuery::neighborhood(vec!["BRAF".to_string()], 1, vec![]);
        let model = client.fetch(&query).await.unwrap();

        graph_mock.assert();
        assert!(model.is_none());
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_propagated() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/graph");
            then.status(500).body("internal error");
        });

        let client = PathwayCommonsClient::new(server.base_url());
        let query = GraphQuery::neighborhood(vec!["BRAF".to_string()], 1, vec![]);
        let err = client.fetch(&query).await.unwrap_err();

        match err {
            BiopaxError::QueryError { status, .. } => assert_eq!(status, 500),
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_sends_datasource_filter() {
        let server = MockServer::start();
        let graph_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/graph")
                .query_param("datasource", "reactome");
            then.status(200).body(SAMPLE_OWL);
        });

        let client = PathwayCommonsClient::new(server.base_url());
        let query =
            GraphQuery::neighborhood(vec!["BRAF".to_string()], 1, vec!["reactome".to_string()]);
        client.fetch(&query).await.unwrap();

        graph_mock.assert();
    }
}
