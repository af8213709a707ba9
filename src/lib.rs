pub mod csv;
pub mod error;
pub mod flashcards;
pub mod import;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod storage;
pub mod store;
pub mod timer;

// Re-exports for convenience
pub use csv::{load_rows, parse_csv_line};
pub use error::{FlashcardError, QuizError, StorageError, StoreError};
pub use flashcards::FlashcardSession;
pub use import::parse_rows;
pub use models::{AnswerResult, Card, Question, QuizSummary, VocabEntry};
pub use quiz::{Advance, QuizEngine, QuizState};
pub use storage::{MemoryStorage, SqliteStorage, StorageMedium, VOCAB_KEY};
pub use store::VocabStore;
pub use timer::DeferredAction;
