// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error taxonomy.
///
/// `NetworkFailure` is the only recoverable variant: the orchestrator logs
/// it and skips the date or game it belongs to. `CacheMiss` and `NoScores`
/// indicate caller misuse (`exists` gates `read`, the deriver is never
/// handed an empty score list) and should not surface in normal flow.
#[derive(Debug, Error)]
pub enum Error {
    #[error("network failure for {url}: {reason}")]
    NetworkFailure { url: String, reason: String },

    #[error("cache entry not found: {0}")]
    CacheMiss(PathBuf),

    #[error("cache entry already exists (write-once): {0}")]
    CacheConflict(PathBuf),

    #[error("invalid date range: {0}")]
    MalformedDateRange(String),

    #[error("tied final score {away}-{home}: basketball games do not end level")]
    TieScore { away: u32, home: u32 },

    #[error("empty score list handed to the outcome deriver")]
    NoScores,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
