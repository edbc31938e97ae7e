pub mod api;
pub mod owl;
pub mod pc_client;
pub mod processor;

pub use crate::domain::model::{BiopaxModel, GraphQuery, GraphQueryKind, Statement};
pub use crate::domain::ports::{GraphSource, StatementExtractor};
pub use crate::utils::error::Result;
