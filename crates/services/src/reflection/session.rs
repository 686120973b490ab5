use chrono::{DateTime, Utc};
use std::fmt;

use reflect_core::model::{AnswerStore, SessionId};
use reflect_core::{NavigationSnapshot, Navigator, Phase, Transition};

/// One in-memory pass through the guide.
///
/// Wraps the navigator with an identity and start time, and logs every
/// trigger. Nothing here outlives the process.
pub struct ReflectionSession {
    id: SessionId,
    started_at: DateTime<Utc>,
    navigator: Navigator,
}

impl ReflectionSession {
    pub(crate) fn new(id: SessionId, started_at: DateTime<Utc>, navigator: Navigator) -> Self {
        Self {
            id,
            started_at,
            navigator,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.navigator.phase()
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigationSnapshot {
        self.navigator.snapshot()
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerStore {
        self.navigator.answers()
    }

    pub(crate) fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn begin(&mut self) -> Transition {
        let transition = self.navigator.begin();
        self.trace("begin", transition);
        transition
    }

    pub fn edit_draft(&mut self, text: impl Into<String>) -> Transition {
        let transition = self.navigator.edit_draft(text);
        // Fires per keystroke; only rejections are logged.
        if !transition.is_applied() {
            self.trace("edit_draft", transition);
        }
        transition
    }

    pub fn advance(&mut self) -> Transition {
        let transition = self.navigator.advance();
        self.trace("advance", transition);
        transition
    }

    pub fn retreat(&mut self) -> Transition {
        let transition = self.navigator.retreat();
        self.trace("retreat", transition);
        transition
    }

    pub fn refine(&mut self) -> Transition {
        let transition = self.navigator.refine();
        self.trace("refine", transition);
        transition
    }

    fn trace(&self, trigger: &'static str, transition: Transition) {
        match transition {
            Transition::Applied => tracing::debug!(
                session = %self.id,
                trigger,
                phase = ?self.navigator.phase(),
                question = self.navigator.question_index(),
                "transition applied"
            ),
            Transition::Ignored(reason) => tracing::debug!(
                session = %self.id,
                trigger,
                ?reason,
                "transition ignored"
            ),
        }
    }
}

impl fmt::Debug for ReflectionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReflectionSession")
            .field("id", &self.id)
            .field("started_at", &self.started_at)
            .field("phase", &self.navigator.phase())
            .field("question_index", &self.navigator.question_index())
            .field("answers_len", &self.navigator.answers().len())
            .finish_non_exhaustive()
    }
}
