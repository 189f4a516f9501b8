use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("{table} has no entry for '{symbol}'")]
    MissingReference { table: &'static str, symbol: String },

    #[error("Record '{symbol}' is missing or has an invalid '{attribute}'")]
    MalformedRecord { symbol: String, attribute: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DataError {
    pub fn missing(table: &'static str, symbol: impl Into<String>) -> Self {
        DataError::MissingReference {
            table,
            symbol: symbol.into(),
        }
    }

    pub fn malformed(symbol: impl Into<String>, attribute: impl Into<String>) -> Self {
        DataError::MalformedRecord {
            symbol: symbol.into(),
            attribute: attribute.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
