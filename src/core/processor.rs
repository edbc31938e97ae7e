use std::collections::HashMap;

use crate::domain::model::{BiopaxModel, Statement};
use crate::domain::ports::StatementExtractor;
use crate::utils::error::Result;

/// A processed model: the model itself plus the statements an extractor
/// pulled out of it. Merged results of a blocked query carry statements
/// only, with no single backing model.
#[derive(Debug)]
pub struct BiopaxProcessor {
    pub model: Option<BiopaxModel>,
    pub statements: Vec<Statement>,
}

impl BiopaxProcessor {
    /// Runs the extractor over the model once and keeps both.
    pub fn process_model<X: StatementExtractor>(
        model: BiopaxModel,
        extractor: &X,
    ) -> Result<Self> {
        let statements = extractor.extract(&model)?;
        tracing::info!(
            "Extracted {} statement(s) from model with {} entities",
            statements.len(),
            model.entities.len()
        );
        Ok(Self {
            model: Some(model),
            statements,
        })
    }

    pub fn from_statements(statements: Vec<Statement>) -> Self {
        Self {
            model: None,
            statements,
        }
    }
}

/// Minimal extractor: one statement per scanned entity, carrying its URI,
/// class and display name. It does no pathway reasoning; richer extractors
/// plug in through the StatementExtractor trait.
pub struct EntityIndexExtractor;

impl StatementExtractor for EntityIndexExtractor {
    fn extract(&self, model: &BiopaxModel) -> Result<Vec<Statement>> {
        let statements = model
            .entities
            .iter()
            .map(|entity| {
                let mut data = HashMap::new();
                data.insert(
                    "uri".to_string(),
                    serde_json::Value::String(entity.uri.clone()),
                );
                data.insert(
                    "class".to_string(),
                    serde_json::Value::String(entity.class_name.clone()),
                );
                if let Some(name) = &entity.display_name {
                    data.insert(
                        "display_name".to_string(),
                        serde_json::Value::String(name.clone()),
                    );
                }
                Statement { data }
            })
            .collect();
        Ok(statements)
    }
}
