use crate::error::QuizError;
use crate::models::{AnswerResult, Question, QuizSummary, VocabEntry};
use crate::timer::DeferredAction;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::time::Duration;

pub const MIN_QUIZ_ENTRIES: usize = 4;
pub const DISTRACTOR_COUNT: usize = 3;
/// A correct answer schedules an automatic advance after this pause; an
/// incorrect one waits for an explicit advance so the learner can read the
/// correct definition first.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Asked,
    Answered,
    Finished,
}

/// Outcome of moving past the current question.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    Next(Question),
    Finished(QuizSummary),
}

/// Multiple-choice quiz over a snapshot of the vocabulary. Operates purely in
/// memory after `start`; edits to the store do not reach a running session.
pub struct QuizEngine {
    entries: Vec<VocabEntry>,
    cursor: usize,
    score: usize,
    state: QuizState,
    question: Option<Question>,
    last_result: Option<AnswerResult>,
    auto_advance: DeferredAction,
    auto_advance_delay: Duration,
}

impl QuizEngine {
    /// Needs at least four entries with four case-insensitively distinct
    /// definitions; fewer leaves no room for three distractors per question.
    pub fn start(entries: Vec<VocabEntry>) -> Result<Self, QuizError> {
        check_pool(&entries)?;

        let mut engine = Self {
            entries,
            cursor: 0,
            score: 0,
            state: QuizState::Asked,
            question: None,
            last_result: None,
            auto_advance: DeferredAction::new(),
            auto_advance_delay: AUTO_ADVANCE_DELAY,
        };
        engine.question = Some(engine.generate_question());
        Ok(engine)
    }

    /// The question currently on screen; stable across repeated calls within
    /// one Asked/Answered round. None once finished.
    pub fn current_question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Scores `choice` against the current question. A correct answer arms
    /// the auto-advance timer. While the result is already showing, repeated
    /// calls re-read it without scoring again; after the finish they return
    /// None.
    pub fn answer(&mut self, choice: &str) -> Option<AnswerResult> {
        match self.state {
            QuizState::Asked => {
                let question = self.question.as_ref()?;
                let correct = choice == question.correct_answer;
                if correct {
                    self.score += 1;
                    self.auto_advance.arm(self.auto_advance_delay);
                }
                let result = AnswerResult {
                    correct,
                    correct_answer: question.correct_answer.clone(),
                };
                self.last_result = Some(result.clone());
                self.state = QuizState::Answered;
                Some(result)
            }
            QuizState::Answered => self.last_result.clone(),
            QuizState::Finished => None,
        }
    }

    /// Moves to the next question, or to the terminal summary past the last
    /// one. Answering is required first: while still unanswered this
    /// re-returns the current question unchanged. Once finished it keeps
    /// returning the summary.
    pub fn advance(&mut self) -> Advance {
        if self.state == QuizState::Answered {
            self.auto_advance.cancel();
            if self.cursor + 1 < self.entries.len() {
                self.cursor += 1;
                let question = self.generate_question();
                self.question = Some(question.clone());
                self.last_result = None;
                self.state = QuizState::Asked;
                return Advance::Next(question);
            }
            self.state = QuizState::Finished;
            self.question = None;
            self.last_result = None;
        }

        match &self.question {
            Some(question) => Advance::Next(question.clone()),
            None => Advance::Finished(self.tally()),
        }
    }

    /// The event loop's hook for the auto-advance timer: advances when the
    /// pause after a correct answer has elapsed.
    pub fn poll_auto_advance(&mut self) -> Option<Advance> {
        if self.state == QuizState::Answered && self.auto_advance.poll() {
            Some(self.advance())
        } else {
            None
        }
    }

    pub fn summary(&self) -> Option<QuizSummary> {
        (self.state == QuizState::Finished).then(|| self.tally())
    }

    /// Equivalent to a fresh start over `entries`, reshuffled. Any pending
    /// auto-advance is cancelled so it cannot touch the new session.
    pub fn reset(&mut self, entries: Vec<VocabEntry>) -> Result<Question, QuizError> {
        check_pool(&entries)?;
        self.auto_advance.cancel();

        self.entries = entries;
        self.entries.shuffle(&mut rand::thread_rng());
        self.cursor = 0;
        self.score = 0;
        self.last_result = None;
        let question = self.generate_question();
        self.question = Some(question.clone());
        self.state = QuizState::Asked;
        Ok(question)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Question number and total for a progress display.
    pub fn position(&self) -> (usize, usize) {
        (self.cursor + 1, self.entries.len())
    }

    fn generate_question(&self) -> Question {
        let current = &self.entries[self.cursor];
        let correct = current.definition.clone();
        let correct_key = correct.to_lowercase();

        // Distinct definitions of the other entries, sampled without
        // replacement. `check_pool` guarantees at least three remain after
        // excluding anything equal to the correct one.
        let mut seen = HashSet::new();
        let mut pool: Vec<String> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i == self.cursor {
                continue;
            }
            let key = entry.definition.to_lowercase();
            if key == correct_key || !seen.insert(key) {
                continue;
            }
            pool.push(entry.definition.clone());
        }

        let mut rng = rand::thread_rng();
        pool.shuffle(&mut rng);
        let mut options: Vec<String> = pool.into_iter().take(DISTRACTOR_COUNT).collect();
        options.push(correct.clone());
        options.shuffle(&mut rng);

        Question {
            prompt: current.term.clone(),
            options,
            correct_answer: correct,
        }
    }

    fn tally(&self) -> QuizSummary {
        let total = self.entries.len();
        let percentage = (self.score as f64 / total as f64 * 100.0).round() as u32;
        QuizSummary {
            score: self.score,
            total,
            percentage,
        }
    }
}

fn check_pool(entries: &[VocabEntry]) -> Result<(), QuizError> {
    let distinct: HashSet<String> = entries.iter().map(|e| e.definition.to_lowercase()).collect();
    let usable = entries.len().min(distinct.len());
    if usable < MIN_QUIZ_ENTRIES {
        return Err(QuizError::InsufficientData(usable));
    }
    Ok(())
}
