use thiserror::Error;

/// Failures of the durable key-value medium underneath the store.
///
/// Read-side corruption never reaches callers (`VocabStore::list` absorbs it);
/// write-side failures always do, since silently dropping a save is worse than
/// reporting it.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(#[from] rusqlite::Error),
    #[error("failed to serialize vocabulary list: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was empty after trimming.
    #[error("{0} must not be empty")]
    Validation(&'static str),
    /// Case-insensitive collision on term or definition with a live entry.
    #[error("an entry with the same term or definition already exists")]
    Duplicate,
    #[error("no vocabulary entry with id {0}")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error)]
pub enum QuizError {
    /// Fewer than four entries, or too few distinct definitions to build
    /// three distractors for every question.
    #[error("a quiz needs at least 4 entries with distinct definitions, found {0}")]
    InsufficientData(usize),
}

#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error("no vocabulary entries to review")]
    EmptyData,
}
