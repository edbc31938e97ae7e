pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::RunSettings;

pub use crate::core::api::BiopaxApi;
pub use crate::core::owl::{model_from_owl_file, model_from_owl_gz, model_from_owl_str};
pub use crate::core::pc_client::{PathwayCommonsClient, DEFAULT_BASE_URL};
pub use crate::core::processor::{BiopaxProcessor, EntityIndexExtractor};
pub use domain::model::{
    BiopaxModel, EntityRef, GraphQuery, GraphQueryKind, Statement, DEFAULT_DATABASES,
    DEFAULT_NEIGHBOR_LIMIT,
};
pub use domain::ports::{GraphSource, StatementExtractor};
pub use utils::error::{BiopaxError, Result};
