use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiopaxError {
    #[error("Pathway Commons request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("OWL parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("OWL attribute error: {0}")]
    AttrError(#[from] quick_xml::events::attributes::AttrError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Graph query failed with status {status}: {message}")]
    QueryError { status: u16, message: String },

    #[error("Statement extraction failed: {message}")]
    ExtractionError { message: String },
}

pub type Result<T> = std::result::Result<T, BiopaxError>;
