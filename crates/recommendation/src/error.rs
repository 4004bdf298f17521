use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendationError {
    #[error("unsupported session snapshot version: {0}")]
    UnsupportedSnapshotVersion(u32),

    #[error("failed to encode or decode session snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("session lock poisoned for key {0}")]
    SessionLockPoisoned(String),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
