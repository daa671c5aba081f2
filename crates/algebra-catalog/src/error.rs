#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("catalog contains no structures")]
    Empty,

    #[error("structure #{index} has a blank name")]
    BlankName { index: usize },

    #[error("duplicate structure name: {name}")]
    DuplicateName { name: String },
}
