use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AnswerKey, AnswerStore, Chapter, Question};

//
// ─── TYPES ─────────────────────────────────────────────────────────────────────
//

/// Coarse stage of a reflection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Intro,
    Questioning,
    Summary,
}

/// Why a trigger left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// `advance` with a draft that is empty after trimming.
    BlankDraft,
    /// `retreat` at the first question of the chapter.
    AtFirstQuestion,
    /// The trigger has no transition defined in this phase.
    WrongPhase(Phase),
}

/// Outcome of a single trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(IgnoreReason),
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigatorError {
    #[error("navigator needs at least one chapter")]
    NoChapters,
}

/// Read-only view of the navigator for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub phase: Phase,
    pub chapter_index: usize,
    pub question_index: usize,
    pub draft_answer: String,
    pub total_questions: usize,
    pub question_text: String,
    pub chapter_title: String,
    pub chapter_icon: String,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub is_last_question: bool,
}

//
// ─── NAVIGATOR ─────────────────────────────────────────────────────────────────
//

/// Linear intro → questions → summary state machine with its answer cache.
///
/// Every trigger completes synchronously and either applies or is ignored;
/// none of them fail. The draft buffer is reloaded from the answer store
/// whenever the question index changes.
#[derive(Debug, Clone)]
pub struct Navigator {
    chapters: Vec<Chapter>,
    chapter_index: usize,
    question_index: usize,
    phase: Phase,
    draft: String,
    answers: AnswerStore,
}

impl Navigator {
    /// Create a navigator positioned at the intro of the first chapter.
    ///
    /// # Errors
    ///
    /// Returns `NavigatorError::NoChapters` if `chapters` is empty.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self, NavigatorError> {
        if chapters.is_empty() {
            return Err(NavigatorError::NoChapters);
        }
        Ok(Self {
            chapters,
            chapter_index: 0,
            question_index: 0,
            phase: Phase::Intro,
            draft: String::new(),
            answers: AnswerStore::new(),
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn chapter_index(&self) -> usize {
        self.chapter_index
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    #[must_use]
    pub fn current_chapter(&self) -> &Chapter {
        &self.chapters[self.chapter_index]
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.current_chapter().questions()[self.question_index]
    }

    #[must_use]
    pub fn current_key(&self) -> AnswerKey {
        AnswerKey::new(self.chapter_index, self.question_index)
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.current_chapter().len()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question_index + 1 == self.total_questions()
    }

    /// Whether `advance` would be accepted right now.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.phase == Phase::Questioning && !self.draft.trim().is_empty()
    }

    /// Whether `retreat` would be accepted right now.
    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.phase == Phase::Questioning && self.question_index > 0
    }

    pub fn begin(&mut self) -> Transition {
        if self.phase != Phase::Intro {
            return Transition::Ignored(IgnoreReason::WrongPhase(self.phase));
        }
        self.question_index = 0;
        self.load_draft();
        self.phase = Phase::Questioning;
        self.check_invariants();
        Transition::Applied
    }

    pub fn edit_draft(&mut self, text: impl Into<String>) -> Transition {
        if self.phase != Phase::Questioning {
            return Transition::Ignored(IgnoreReason::WrongPhase(self.phase));
        }
        self.draft = text.into();
        Transition::Applied
    }

    /// Commit the draft and move forward, or into the summary after the last question.
    pub fn advance(&mut self) -> Transition {
        if self.phase != Phase::Questioning {
            return Transition::Ignored(IgnoreReason::WrongPhase(self.phase));
        }
        if self.draft.trim().is_empty() {
            return Transition::Ignored(IgnoreReason::BlankDraft);
        }

        self.answers.upsert(self.current_key(), self.draft.clone());

        if self.is_last_question() {
            self.phase = Phase::Summary;
        } else {
            self.question_index += 1;
            self.load_draft();
        }
        self.check_invariants();
        Transition::Applied
    }

    /// Step back one question, discarding the uncommitted draft.
    pub fn retreat(&mut self) -> Transition {
        if self.phase != Phase::Questioning {
            return Transition::Ignored(IgnoreReason::WrongPhase(self.phase));
        }
        if self.question_index == 0 {
            return Transition::Ignored(IgnoreReason::AtFirstQuestion);
        }

        self.question_index -= 1;
        debug_assert!(
            self.answers.contains(self.current_key()),
            "retreat reached {:?} which was never committed",
            self.current_key()
        );
        self.load_draft();
        self.check_invariants();
        Transition::Applied
    }

    pub fn refine(&mut self) -> Transition {
        if self.phase != Phase::Summary {
            return Transition::Ignored(IgnoreReason::WrongPhase(self.phase));
        }
        self.phase = Phase::Questioning;
        Transition::Applied
    }

    /// Accepted only in the summary. The caller reports completion outward.
    #[must_use]
    pub fn acknowledge(&self) -> Transition {
        if self.phase != Phase::Summary {
            return Transition::Ignored(IgnoreReason::WrongPhase(self.phase));
        }
        Transition::Applied
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigationSnapshot {
        let chapter = self.current_chapter();
        NavigationSnapshot {
            phase: self.phase,
            chapter_index: self.chapter_index,
            question_index: self.question_index,
            draft_answer: self.draft.clone(),
            total_questions: chapter.len(),
            question_text: self.current_question().text().to_string(),
            chapter_title: chapter.title().to_string(),
            chapter_icon: chapter.icon().to_string(),
            can_advance: self.can_advance(),
            can_retreat: self.can_retreat(),
            is_last_question: self.is_last_question(),
        }
    }

    fn load_draft(&mut self) {
        self.draft = self
            .answers
            .get(self.current_key())
            .map(str::to_string)
            .unwrap_or_default();
    }

    fn check_invariants(&self) {
        debug_assert!(self.chapter_index < self.chapters.len());
        debug_assert!(self.question_index < self.total_questions());
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
