use std::path::Path;

use crate::core::owl;
use crate::core::processor::BiopaxProcessor;
use crate::domain::model::{BiopaxModel, GraphQuery};
use crate::domain::ports::{GraphSource, StatementExtractor};
use crate::utils::error::Result;

/// Retrieval front end: runs graph queries through a GraphSource, loads
/// local OWL files, and hands every obtained model to the extractor.
pub struct BiopaxApi<S: GraphSource, X: StatementExtractor> {
    source: S,
    extractor: X,
}

impl<S: GraphSource, X: StatementExtractor> BiopaxApi<S, X> {
    pub fn new(source: S, extractor: X) -> Self {
        Self { source, extractor }
    }

    /// Neighborhood query around a set of source genes.
    pub async fn pc_neighborhood(
        &self,
        gene_names: &[String],
        neighbor_limit: u32,
        database_filter: &[String],
    ) -> Result<Option<BiopaxProcessor>> {
        let query = GraphQuery::neighborhood(
            gene_names.to_vec(),
            neighbor_limit,
            database_filter.to_vec(),
        );
        self.run_query(query).await
    }

    /// Paths-between query over a single gene set, in all directions.
    ///
    /// Large gene sets (above roughly 60 genes) can fail on the server
    /// side. Passing a block size replaces the single query with a series
    /// of paths-between queries within blocks and paths-from-to queries
    /// across distinct blocks, and merges the extracted statements.
    pub async fn pc_paths_between(
        &self,
        gene_names: &[String],
        neighbor_limit: u32,
        database_filter: &[String],
        block_size: Option<usize>,
    ) -> Result<Option<BiopaxProcessor>> {
        let block_size = match block_size.filter(|size| *size > 0) {
            Some(size) => size,
            None => {
                let query = GraphQuery::paths_between(
                    gene_names.to_vec(),
                    neighbor_limit,
                    database_filter.to_vec(),
                );
                return self.run_query(query).await;
            }
        };

        let plan = block_plan(gene_names, block_size);
        tracing::info!(
            "Splitting paths-between query over {} genes into {} block queries",
            gene_names.len(),
            plan.len()
        );

        let mut statements = Vec::new();
        for block_query in plan {
            let result = match block_query {
                BlockQuery::Within(genes) => {
                    let query = GraphQuery::paths_between(
                        genes,
                        neighbor_limit,
                        database_filter.to_vec(),
                    );
                    self.run_query(query).await?
                }
                BlockQuery::Between(sources, targets) => {
                    let query = GraphQuery::paths_from_to(
                        sources,
                        targets,
                        neighbor_limit,
                        database_filter.to_vec(),
                    );
                    self.run_query(query).await?
                }
            };
            if let Some(bp) = result {
                statements.extend(bp.statements);
            }
        }

        Ok(Some(BiopaxProcessor::from_statements(statements)))
    }

    /// Paths-from-to query from a set of source genes to a set of targets.
    pub async fn pc_paths_from_to(
        &self,
        source_genes: &[String],
        target_genes: &[String],
        neighbor_limit: u32,
        database_filter: &[String],
    ) -> Result<Option<BiopaxProcessor>> {
        let query = GraphQuery::paths_from_to(
            source_genes.to_vec(),
            target_genes.to_vec(),
            neighbor_limit,
            database_filter.to_vec(),
        );
        self.run_query(query).await
    }

    pub fn owl_file(&self, path: impl AsRef<Path>) -> Result<BiopaxProcessor> {
        let model = owl::model_from_owl_file(path)?;
        self.process_model(model)
    }

    pub fn owl_gz(&self, path: impl AsRef<Path>) -> Result<BiopaxProcessor> {
        let model = owl::model_from_owl_gz(path)?;
        self.process_model(model)
    }

    pub fn owl_str(&self, owl: &str) -> Result<BiopaxProcessor> {
        let model = owl::model_from_owl_str(owl)?;
        self.process_model(model)
    }

    pub fn process_model(&self, model: BiopaxModel) -> Result<BiopaxProcessor> {
        BiopaxProcessor::process_model(model, &self.extractor)
    }

    async fn run_query(&self, query: GraphQuery) -> Result<Option<BiopaxProcessor>> {
        match self.source.fetch(&query).await? {
            Some(model) => Ok(Some(self.process_model(model)?)),
            None => {
                tracing::warn!("Query {} returned no model", query.kind.as_param());
                Ok(None)
            }
        }
    }
}

/// One sub-query of a blocked paths-between run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BlockQuery {
    Within(Vec<String>),
    Between(Vec<String>, Vec<String>),
}

/// Chunks a gene list into consecutive blocks of at most `block_size`.
pub(crate) fn gene_blocks(genes: &[String], block_size: usize) -> Vec<Vec<String>> {
    genes
        .chunks(block_size)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Expands a blocked paths-between run into its sub-queries: paths-between
/// within each block, paths-from-to for every ordered pair of distinct
/// blocks. Each ordered pair of genes from different blocks is covered by
/// exactly one sub-query.
pub(crate) fn block_plan(genes: &[String], block_size: usize) -> Vec<BlockQuery> {
    let blocks = gene_blocks(genes, block_size);
    let mut plan = Vec::with_capacity(blocks.len() * blocks.len());
    for (i, sources) in blocks.iter().enumerate() {
        for (j, targets) in blocks.iter().enumerate() {
            if i == j {
                plan.push(BlockQuery::Within(sources.clone()));
            } else {
                plan.push(BlockQuery::Between(sources.clone(), targets.clone()));
            }
        }
    }
    plan
}
