use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Addresses one answer slot: a question position inside a chapter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnswerKey {
    chapter_index: usize,
    question_index: usize,
}

impl AnswerKey {
    #[must_use]
    pub const fn new(chapter_index: usize, question_index: usize) -> Self {
        Self {
            chapter_index,
            question_index,
        }
    }

    #[must_use]
    pub const fn chapter_index(&self) -> usize {
        self.chapter_index
    }

    #[must_use]
    pub const fn question_index(&self) -> usize {
        self.question_index
    }
}

impl fmt::Debug for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnswerKey({}, {})", self.chapter_index, self.question_index)
    }
}

/// In-memory answers for a session, keyed by position.
///
/// The store is a plain mapping. It does not validate text; the navigator
/// only commits drafts that are non-blank. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    answers: BTreeMap<AnswerKey, String>,
}

impl AnswerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the answer for `key`.
    pub fn upsert(&mut self, key: AnswerKey, text: impl Into<String>) {
        self.answers.insert(key, text.into());
    }

    #[must_use]
    pub fn get(&self, key: AnswerKey) -> Option<&str> {
        self.answers.get(&key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: AnswerKey) -> bool {
        self.answers.contains_key(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answers ordered by chapter, then question.
    pub fn iter(&self) -> impl Iterator<Item = (AnswerKey, &str)> + '_ {
        self.answers.iter().map(|(key, text)| (*key, text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_overwrites_existing_answer() {
        let mut store = AnswerStore::new();
        let key = AnswerKey::new(0, 3);

        store.upsert(key, "first");
        store.upsert(key, "second");

        assert_eq!(store.get(key), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_key_is_absent() {
        let store = AnswerStore::new();
        assert_eq!(store.get(AnswerKey::new(0, 0)), None);
        assert!(store.is_empty());
    }

    #[test]
    fn composite_keys_do_not_collide() {
        // "ch1_q11" vs "ch11_q1" style collisions cannot happen with typed keys.
        let mut store = AnswerStore::new();
        store.upsert(AnswerKey::new(1, 11), "a");
        store.upsert(AnswerKey::new(11, 1), "b");

        assert_eq!(store.get(AnswerKey::new(1, 11)), Some("a"));
        assert_eq!(store.get(AnswerKey::new(11, 1)), Some("b"));
    }

    #[test]
    fn iter_is_ordered_by_chapter_then_question() {
        let mut store = AnswerStore::new();
        store.upsert(AnswerKey::new(1, 0), "c");
        store.upsert(AnswerKey::new(0, 2), "b");
        store.upsert(AnswerKey::new(0, 0), "a");

        let texts: Vec<_> = store.iter().map(|(_, text)| text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }
}
