use std::fmt;
use std::sync::Arc;

use reflect_core::model::{GuideContent, SessionId};
use reflect_core::{IgnoreReason, Navigator, Transition};

use super::report::CompletionReport;
use super::session::ReflectionSession;
use crate::Clock;
use crate::error::ReflectionError;
use crate::notify::CompletionNotifier;

/// Result of acknowledging the pattern note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcknowledgeOutcome {
    /// The notifier received this report.
    Reported(CompletionReport),
    /// The session was not in its summary; nothing was sent.
    Ignored(IgnoreReason),
}

/// Starts reflection sessions over a guide and owns the completion boundary.
#[derive(Clone)]
pub struct ReflectionService {
    clock: Clock,
    content: Arc<GuideContent>,
    notifier: Arc<dyn CompletionNotifier>,
}

impl ReflectionService {
    #[must_use]
    pub fn new(
        clock: Clock,
        content: Arc<GuideContent>,
        notifier: Arc<dyn CompletionNotifier>,
    ) -> Self {
        Self {
            clock,
            content,
            notifier,
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<GuideContent> {
        Arc::clone(&self.content)
    }

    /// Start a new session at the intro of the first chapter.
    ///
    /// # Errors
    ///
    /// Returns `ReflectionError::Navigator` if the guide has no chapters.
    pub fn start_session(&self) -> Result<ReflectionSession, ReflectionError> {
        let navigator = Navigator::new(self.content.chapters().to_vec())?;
        let session = ReflectionSession::new(SessionId::new_random(), self.clock.now(), navigator);
        tracing::info!(
            session = %session.id(),
            questions = session.snapshot().total_questions,
            "reflection session started"
        );
        Ok(session)
    }

    /// Report the session outward if it is in its summary.
    ///
    /// Acknowledging again reports again; the session itself does not change.
    ///
    /// # Errors
    ///
    /// Returns `ReflectionError::Notify` if the notifier fails to deliver.
    pub fn acknowledge(
        &self,
        session: &ReflectionSession,
    ) -> Result<AcknowledgeOutcome, ReflectionError> {
        if let Transition::Ignored(reason) = session.navigator().acknowledge() {
            tracing::debug!(session = %session.id(), ?reason, "acknowledge ignored");
            return Ok(AcknowledgeOutcome::Ignored(reason));
        }

        let report = CompletionReport::from_navigator(
            session.id(),
            session.started_at(),
            self.clock.now(),
            session.navigator(),
        );
        self.notifier.session_acknowledged(&report)?;
        tracing::info!(
            session = %session.id(),
            answers = report.entries.len(),
            "reflection session reported"
        );
        Ok(AcknowledgeOutcome::Reported(report))
    }
}

impl fmt::Debug for ReflectionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReflectionService")
            .field("clock", &self.clock)
            .field("title", &self.content.title())
            .finish_non_exhaustive()
    }
}
