use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaStoreError {
    #[error("failed to read schema file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write schema file {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("malformed schema file {path}: {source}")]
    Parse { path: PathBuf, source: serde_yaml::Error },
    #[error("failed to serialize schema: {0}")]
    Serialize(#[from] serde_yaml::Error),
}
