use crate::error::FlashcardError;
use crate::models::{Card, VocabEntry};
use rand::Rng;
use rand::seq::SliceRandom;

/// Flip-card traversal over a snapshot of the vocabulary. The stepper clamps
/// at both ends; wraparound is left to the presentation layer if it wants it.
pub struct FlashcardSession {
    entries: Vec<VocabEntry>,
    cursor: usize,
    reversed: bool,
    flipped: bool,
}

impl FlashcardSession {
    pub fn start(entries: Vec<VocabEntry>) -> Result<Self, FlashcardError> {
        if entries.is_empty() {
            return Err(FlashcardError::EmptyData);
        }
        Ok(Self {
            entries,
            cursor: 0,
            reversed: false,
            flipped: false,
        })
    }

    pub fn next(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
        self.flipped = false;
    }

    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.flipped = false;
    }

    /// Jumps to a uniformly random card other than the current one; a no-op
    /// move when only one card exists.
    pub fn jump_random(&mut self) {
        if self.entries.len() > 1 {
            let mut rng = rand::thread_rng();
            let mut index = rng.gen_range(0..self.entries.len() - 1);
            if index >= self.cursor {
                index += 1;
            }
            self.cursor = index;
        }
        self.flipped = false;
    }

    pub fn shuffle(&mut self) {
        self.entries.shuffle(&mut rand::thread_rng());
        self.cursor = 0;
        self.flipped = false;
    }

    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Swaps which field is the front face (term-first vs definition-first).
    pub fn toggle_direction(&mut self) {
        self.reversed = !self.reversed;
        self.flipped = false;
    }

    pub fn current_card(&self) -> Card {
        let entry = &self.entries[self.cursor];
        let (front, back) = if self.reversed {
            (entry.definition.clone(), entry.term.clone())
        } else {
            (entry.term.clone(), entry.definition.clone())
        };
        Card { front, back }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Card number and total for the "n / total" indicator.
    pub fn position(&self) -> (usize, usize) {
        (self.cursor + 1, self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(id: i64, term: &str, definition: &str) -> VocabEntry {
        VocabEntry {
            id,
            term: term.to_string(),
            definition: definition.to_string(),
            created_at: Utc::now(),
        }
    }

    fn deck() -> Vec<VocabEntry> {
        vec![
            entry(1, "cat", "kucing"),
            entry(2, "dog", "anjing"),
            entry(3, "bird", "burung"),
        ]
    }

    #[test]
    fn test_start_requires_an_entry() {
        assert!(matches!(
            FlashcardSession::start(Vec::new()),
            Err(FlashcardError::EmptyData)
        ));
    }

    #[test]
    fn test_single_card_clamps_both_ways() {
        let mut session = FlashcardSession::start(vec![entry(1, "cat", "kucing")]).unwrap();

        let card = session.current_card();
        assert_eq!(card.front, "cat");
        assert_eq!(card.back, "kucing");

        session.next();
        session.previous();
        assert_eq!(session.position(), (1, 1));

        session.toggle_direction();
        let card = session.current_card();
        assert_eq!(card.front, "kucing");
        assert_eq!(card.back, "cat");
    }

    #[test]
    fn test_next_and_previous_clamp_at_ends() {
        let mut session = FlashcardSession::start(deck()).unwrap();

        session.previous();
        assert_eq!(session.position(), (1, 3));

        for _ in 0..10 {
            session.next();
        }
        assert_eq!(session.position(), (3, 3));
        assert_eq!(session.current_card().front, "bird");
    }

    #[test]
    fn test_navigation_resets_flip() {
        let mut session = FlashcardSession::start(deck()).unwrap();

        session.toggle_flip();
        assert!(session.is_flipped());
        session.next();
        assert!(!session.is_flipped());

        session.toggle_flip();
        session.previous();
        assert!(!session.is_flipped());

        session.toggle_flip();
        session.toggle_direction();
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_toggle_flip_keeps_cursor() {
        let mut session = FlashcardSession::start(deck()).unwrap();
        session.next();
        session.toggle_flip();
        assert!(session.is_flipped());
        assert_eq!(session.position(), (2, 3));
        session.toggle_flip();
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_jump_random_avoids_current_card() {
        let mut session = FlashcardSession::start(deck()).unwrap();
        for _ in 0..50 {
            let (before, _) = session.position();
            session.jump_random();
            let (after, _) = session.position();
            assert_ne!(before, after);
        }
    }

    #[test]
    fn test_jump_random_single_card_stays() {
        let mut session = FlashcardSession::start(vec![entry(1, "cat", "kucing")]).unwrap();
        session.toggle_flip();
        session.jump_random();
        assert_eq!(session.position(), (1, 1));
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_shuffle_resets_cursor_and_keeps_cards() {
        let mut session = FlashcardSession::start(deck()).unwrap();
        session.next();
        session.toggle_flip();

        session.shuffle();
        assert_eq!(session.position(), (1, 3));
        assert!(!session.is_flipped());

        let mut fronts = Vec::new();
        for _ in 0..3 {
            fronts.push(session.current_card().front);
            session.next();
        }
        fronts.sort();
        assert_eq!(fronts, vec!["bird", "cat", "dog"]);
    }

    #[test]
    fn test_direction_applies_to_every_card() {
        let mut session = FlashcardSession::start(deck()).unwrap();
        session.toggle_direction();

        session.next();
        assert_eq!(session.current_card().front, "anjing");
        session.next();
        assert_eq!(session.current_card().front, "burung");
    }
}
