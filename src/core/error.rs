//! Errors raised while reading a docs directory

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk docs directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid frontmatter in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid category metadata in {path}: {source}")]
    CategoryJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid category metadata in {path}: {source}")]
    CategoryYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("docs directory not found: {0}")]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, DocsError>;
