use reflect_core::model::GuideContent;
use reflect_core::{NavigationSnapshot, Phase};
use services::{AcknowledgeOutcome, ReflectionService, ReflectionSession};

use crate::views::ViewError;
use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuideIntent {
    Begin,
    EditDraft(String),
    Advance,
    Retreat,
    Refine,
    Acknowledge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuideOutcome {
    Continue,
    Acknowledged { answers: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntroVm {
    pub eyebrow: String,
    pub heading: String,
    pub body_html: String,
    pub begin_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub chapter_label: String,
    pub chapter_icon: String,
    pub progress_label: String,
    pub question_text: String,
    pub draft: String,
    pub answer_aria_label: String,
    pub next_label: &'static str,
    pub can_advance: bool,
    pub show_back: bool,
    pub placeholder: String,
    pub footer_hint: String,
    pub speech_hint: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternNoteVm {
    pub heading: String,
    pub observation: String,
    pub insight: String,
    pub prompt: String,
    pub refine_label: String,
    pub acknowledge_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuideScreenVm {
    Intro(IntroVm),
    Question(QuestionCardVm),
    PatternNote(PatternNoteVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuideHeaderVm {
    pub title: String,
    pub step_label: String,
}

pub struct GuideVm {
    session: ReflectionSession,
}

impl GuideVm {
    #[must_use]
    pub fn new(session: ReflectionSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigationSnapshot {
        self.session.snapshot()
    }

    /// Apply a navigation intent. Rejected triggers leave the session as is.
    pub fn apply(&mut self, intent: GuideIntent) {
        match intent {
            GuideIntent::Begin => {
                self.session.begin();
            }
            GuideIntent::EditDraft(text) => {
                self.session.edit_draft(text);
            }
            GuideIntent::Advance => {
                self.session.advance();
            }
            GuideIntent::Retreat => {
                self.session.retreat();
            }
            GuideIntent::Refine => {
                self.session.refine();
            }
            // Needs the service; see `acknowledge`.
            GuideIntent::Acknowledge => {}
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::AcknowledgeFailed` if the completion report could not be delivered.
    pub fn acknowledge(&self, reflection: &ReflectionService) -> Result<GuideOutcome, ViewError> {
        match reflection.acknowledge(&self.session) {
            Ok(AcknowledgeOutcome::Reported(report)) => Ok(GuideOutcome::Acknowledged {
                answers: report.entries.len(),
            }),
            Ok(AcknowledgeOutcome::Ignored(_)) => Ok(GuideOutcome::Continue),
            Err(err) => {
                tracing::warn!(session = %self.session.id(), error = %err, "acknowledge failed");
                Err(ViewError::AcknowledgeFailed)
            }
        }
    }

    #[must_use]
    pub fn header(&self, content: &GuideContent) -> GuideHeaderVm {
        let step_label = match self.phase() {
            Phase::Intro => "The Initial Call".to_string(),
            Phase::Questioning | Phase::Summary => format!(
                "Chapter {} / {}",
                self.snapshot().chapter_index + 1,
                content.planned_chapters()
            ),
        };
        GuideHeaderVm {
            title: content.title().to_string(),
            step_label,
        }
    }

    #[must_use]
    pub fn screen(&self, content: &GuideContent) -> GuideScreenVm {
        match self.phase() {
            Phase::Intro => GuideScreenVm::Intro(map_intro(content)),
            Phase::Questioning => {
                GuideScreenVm::Question(map_question_card(&self.snapshot(), content))
            }
            Phase::Summary => GuideScreenVm::PatternNote(map_pattern_note(content)),
        }
    }
}

/// # Errors
///
/// Returns `ViewError::Unknown` if the session cannot be started.
pub fn start_guide(reflection: &ReflectionService) -> Result<GuideVm, ViewError> {
    let session = reflection
        .start_session()
        .map_err(|_| ViewError::Unknown)?;
    Ok(GuideVm::new(session))
}

#[must_use]
pub fn map_intro(content: &GuideContent) -> IntroVm {
    let intro = content.intro();
    IntroVm {
        eyebrow: intro.eyebrow.clone(),
        heading: intro.heading.clone(),
        body_html: markdown_to_html(&intro.body_markdown),
        begin_label: intro.begin_label.clone(),
    }
}

#[must_use]
pub fn map_question_card(snapshot: &NavigationSnapshot, content: &GuideContent) -> QuestionCardVm {
    let number = snapshot.question_index + 1;
    QuestionCardVm {
        chapter_label: format!("Chapter {}", snapshot.chapter_index + 1),
        chapter_icon: snapshot.chapter_icon.clone(),
        progress_label: format!("{number} / {}", snapshot.total_questions),
        question_text: snapshot.question_text.clone(),
        draft: snapshot.draft_answer.clone(),
        answer_aria_label: format!("Reflection for question {number}"),
        next_label: if snapshot.is_last_question {
            "Identify Patterns"
        } else {
            "Next Step"
        },
        can_advance: snapshot.can_advance,
        show_back: snapshot.can_retreat,
        placeholder: content.answer_placeholder().to_string(),
        footer_hint: content.footer_hint().to_string(),
        speech_hint: content.speech_hint().to_string(),
    }
}

#[must_use]
pub fn map_pattern_note(content: &GuideContent) -> PatternNoteVm {
    let note = content.pattern_note();
    PatternNoteVm {
        heading: note.heading.clone(),
        observation: note.observation.clone(),
        insight: note.insight.clone(),
        prompt: note.prompt.clone(),
        refine_label: note.refine_label.clone(),
        acknowledge_label: note.acknowledge_label.clone(),
    }
}
