use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One term/definition pair as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// Stable and never reused. Millisecond timestamp at creation, bumped past
    /// the previous maximum when two entries land in the same millisecond.
    pub id: i64,
    pub term: String,
    pub definition: String,
    /// Informational only; display order is insertion order, not this.
    pub created_at: DateTime<Utc>,
}

/// One multiple-choice question: the prompt term plus four shuffled options,
/// exactly one of which is the correct definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
}

/// The two faces of the flashcard currently under the cursor. Which field ends
/// up on the front depends on the session's direction flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub front: String,
    pub back: String,
}
