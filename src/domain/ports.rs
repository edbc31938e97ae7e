use crate::domain::model::{BiopaxModel, GraphQuery, Statement};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where graph queries are answered. `Ok(None)` means the source found no
/// matching model; errors are transport or protocol failures.
#[async_trait]
pub trait GraphSource: Send + Sync {
    async fn fetch(&self, query: &GraphQuery) -> Result<Option<BiopaxModel>>;
}

/// The seam to the statement-extraction machinery. Implementations walk a
/// model and return whatever statements they can read out of it.
pub trait StatementExtractor: Send + Sync {
    fn extract(&self, model: &BiopaxModel) -> Result<Vec<Statement>>;
}
