use crate::error::{StorageError, StoreError};
use crate::logger;
use crate::models::VocabEntry;
use crate::storage::{StorageMedium, VOCAB_KEY};
use chrono::Utc;
use std::collections::HashSet;

/// Durable vocabulary collection with write-through persistence. Every
/// mutating operation reloads the committed list, applies the change and
/// persists the full list before returning.
pub struct VocabStore {
    storage: Box<dyn StorageMedium>,
}

impl VocabStore {
    pub fn new(storage: Box<dyn StorageMedium>) -> Self {
        Self { storage }
    }

    /// Current entries in persisted order. A missing, unreadable or corrupt
    /// slot yields an empty list; losing a read must never break the viewing
    /// flow, so corruption is logged and absorbed here.
    pub fn list(&self) -> Vec<VocabEntry> {
        match self.storage.get_item(VOCAB_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    logger::log(&format!("Discarding corrupt vocabulary list: {}", e));
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                logger::log(&format!("Failed to read vocabulary list: {}", e));
                Vec::new()
            }
        }
    }

    pub fn add(&mut self, term: &str, definition: &str) -> Result<VocabEntry, StoreError> {
        let term = term.trim();
        let definition = definition.trim();
        validate(term, definition)?;

        let mut entries = self.list();
        if collides(&entries, term, definition) {
            return Err(StoreError::Duplicate);
        }

        let entry = VocabEntry {
            id: next_id(&entries),
            term: term.to_string(),
            definition: definition.to_string(),
            created_at: Utc::now(),
        };
        entries.push(entry.clone());
        self.persist(&entries)?;
        Ok(entry)
    }

    /// Lenient batch insert for imports: malformed pairs and duplicates are
    /// skipped rather than rejected, since imported sheets routinely overlap
    /// existing data. Within the batch the first unique occurrence wins.
    /// Returns only the entries actually appended.
    pub fn add_batch(&mut self, pairs: &[(String, String)]) -> Result<Vec<VocabEntry>, StoreError> {
        let mut entries = self.list();
        let mut terms: HashSet<String> = entries.iter().map(|e| e.term.to_lowercase()).collect();
        let mut definitions: HashSet<String> =
            entries.iter().map(|e| e.definition.to_lowercase()).collect();

        let mut appended = Vec::new();
        for (term, definition) in pairs {
            let term = term.trim();
            let definition = definition.trim();
            if term.is_empty() || definition.is_empty() {
                continue;
            }
            if terms.contains(&term.to_lowercase())
                || definitions.contains(&definition.to_lowercase())
            {
                continue;
            }

            let entry = VocabEntry {
                id: next_id(&entries),
                term: term.to_string(),
                definition: definition.to_string(),
                created_at: Utc::now(),
            };
            terms.insert(entry.term.to_lowercase());
            definitions.insert(entry.definition.to_lowercase());
            entries.push(entry.clone());
            appended.push(entry);
        }

        if !appended.is_empty() {
            self.persist(&entries)?;
        }
        Ok(appended)
    }

    /// Replaces term and definition in place, preserving id and created_at.
    /// The duplicate check covers the term against all other entries; the
    /// entry's own prior values never count as collisions.
    pub fn edit(
        &mut self,
        id: i64,
        new_term: &str,
        new_definition: &str,
    ) -> Result<VocabEntry, StoreError> {
        let term = new_term.trim();
        let definition = new_definition.trim();
        validate(term, definition)?;

        let mut entries = self.list();
        let pos = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let term_key = term.to_lowercase();
        if entries
            .iter()
            .any(|e| e.id != id && e.term.to_lowercase() == term_key)
        {
            return Err(StoreError::Duplicate);
        }

        entries[pos].term = term.to_string();
        entries[pos].definition = definition.to_string();
        self.persist(&entries)?;
        Ok(entries[pos].clone())
    }

    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let mut entries = self.list();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(StoreError::NotFound(id));
        }
        self.persist(&entries)
    }

    /// Drops the whole collection. Idempotent; only a storage write failure
    /// can surface.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.storage.remove_item(VOCAB_KEY)?;
        Ok(())
    }

    fn persist(&mut self, entries: &[VocabEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries).map_err(StorageError::from)?;
        self.storage.set_item(VOCAB_KEY, &raw)?;
        Ok(())
    }
}

fn validate(term: &str, definition: &str) -> Result<(), StoreError> {
    if term.is_empty() {
        return Err(StoreError::Validation("term"));
    }
    if definition.is_empty() {
        return Err(StoreError::Validation("definition"));
    }
    Ok(())
}

fn collides(entries: &[VocabEntry], term: &str, definition: &str) -> bool {
    let term_key = term.to_lowercase();
    let definition_key = definition.to_lowercase();
    entries.iter().any(|e| {
        e.term.to_lowercase() == term_key || e.definition.to_lowercase() == definition_key
    })
}

/// Millisecond timestamp, bumped past the current maximum so ids stay unique
/// and increasing even when several entries are created in the same
/// millisecond.
fn next_id(entries: &[VocabEntry]) -> i64 {
    let max = entries.iter().map(|e| e.id).max().unwrap_or(0);
    Utc::now().timestamp_millis().max(max + 1)
}
