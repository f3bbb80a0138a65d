use std::{io, path::PathBuf};

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read resource file {path}")]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Resource pool `{0}` is empty")]
    EmptyPool(String),

    #[error("Resource pool `{0}` was not loaded")]
    MissingPool(&'static str),

    #[error("Product name is empty, can't derive a product code")]
    EmptyProductName,

    /// Fewer pre-generated catalog slots than the businesses need.
    #[error("Catalog exhausted: {businesses} businesses need {needed}, {available} generated")]
    CatalogExhausted {
        businesses: usize,
        needed: usize,
        available: usize,
    },

    #[error("Run counter and window size start at 1, got run {run} of size {size}")]
    EmptyRunWindow { run: u32, size: u32 },

    #[error("Failed to write {path}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read state file {path}")]
    StateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("State file {path} is malformed")]
    StateParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize id state")]
    StateSerialize(#[from] toml::ser::Error),

    #[error("Failed to query the live store")]
    Store(#[from] DbErr),
}

pub type Result<T, E = SeedError> = std::result::Result<T, E>;
