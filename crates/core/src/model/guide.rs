use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    Blank,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChapterError {
    #[error("chapter title cannot be empty")]
    EmptyTitle,

    #[error("chapter must contain at least one question")]
    NoQuestions,

    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuideContentError {
    #[error("guide title cannot be empty")]
    EmptyTitle,

    #[error("intro heading cannot be empty")]
    EmptyIntroHeading,

    #[error("guide must contain at least one chapter")]
    NoChapters,

    #[error("chapter {index} is invalid: {source}")]
    Chapter {
        index: usize,
        #[source]
        source: ChapterError,
    },

    #[error("planned chapters ({planned}) is less than populated chapters ({populated})")]
    PlannedChapters { planned: usize, populated: usize },

    #[error("pattern note heading cannot be empty")]
    EmptyPatternHeading,
}

//
// ─── QUESTIONS & CHAPTERS ──────────────────────────────────────────────────────
//

/// An open-ended prompt. Identified by its position within a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Question(String);

impl Question {
    /// # Errors
    ///
    /// Returns `QuestionError::Blank` if the text is empty after trimming.
    pub fn parse(text: impl Into<String>) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::Blank);
        }
        Ok(Self(text))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

/// An ordered, non-empty group of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    title: String,
    icon: String,
    questions: Vec<Question>,
}

impl Chapter {
    /// # Errors
    ///
    /// Returns `ChapterError::EmptyTitle` for a blank title and
    /// `ChapterError::NoQuestions` when `questions` is empty.
    pub fn new(
        title: impl Into<String>,
        icon: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, ChapterError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ChapterError::EmptyTitle);
        }
        if questions.is_empty() {
            return Err(ChapterError::NoQuestions);
        }
        Ok(Self {
            title,
            icon: icon.into(),
            questions,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Presentation-only icon tag.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed chapter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterDraft {
    pub title: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    pub questions: Vec<String>,
}

impl ChapterDraft {
    /// # Errors
    ///
    /// Returns `ChapterError` for a blank title, no questions, or a blank question.
    pub fn validate(self) -> Result<Chapter, ChapterError> {
        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                Question::parse(text).map_err(|source| ChapterError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Chapter::new(self.title, self.icon, questions)
    }
}

//
// ─── GUIDE CONTENT ─────────────────────────────────────────────────────────────
//

/// The introductory essay shown before the first question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntroContent {
    pub eyebrow: String,
    pub heading: String,
    /// Markdown body. Rendered and sanitized by the presentation layer.
    pub body_markdown: String,
    pub begin_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntroDraft {
    #[serde(default)]
    pub eyebrow: String,
    pub heading: String,
    #[serde(default)]
    pub body_markdown: String,
    #[serde(default = "default_begin_label")]
    pub begin_label: String,
}

/// The canned "pattern identified" note shown after the last question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternNote {
    pub heading: String,
    pub observation: String,
    pub insight: String,
    pub prompt: String,
    pub refine_label: String,
    pub acknowledge_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatternNoteDraft {
    pub heading: String,
    #[serde(default)]
    pub observation: String,
    #[serde(default)]
    pub insight: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_refine_label")]
    pub refine_label: String,
    #[serde(default = "default_acknowledge_label")]
    pub acknowledge_label: String,
}

/// Validated content bundle handed to the session at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideContent {
    title: String,
    intro: IntroContent,
    chapters: Vec<Chapter>,
    planned_chapters: usize,
    pattern_note: PatternNote,
    answer_placeholder: String,
    footer_hint: String,
    speech_hint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuideContentDraft {
    pub title: String,
    pub intro: IntroDraft,
    pub chapters: Vec<ChapterDraft>,
    #[serde(default)]
    pub planned_chapters: Option<usize>,
    pub pattern_note: PatternNoteDraft,
    #[serde(default = "default_answer_placeholder")]
    pub answer_placeholder: String,
    #[serde(default)]
    pub footer_hint: String,
    #[serde(default)]
    pub speech_hint: String,
}

impl GuideContentDraft {
    /// Validate and normalize the draft into guide content.
    ///
    /// `planned_chapters` defaults to the number of populated chapters.
    ///
    /// # Errors
    ///
    /// Returns `GuideContentError` if any title or question is blank, if there
    /// are no chapters, or if `planned_chapters` undercounts the chapters.
    pub fn validate(self) -> Result<GuideContent, GuideContentError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(GuideContentError::EmptyTitle);
        }
        if self.intro.heading.trim().is_empty() {
            return Err(GuideContentError::EmptyIntroHeading);
        }
        if self.pattern_note.heading.trim().is_empty() {
            return Err(GuideContentError::EmptyPatternHeading);
        }
        if self.chapters.is_empty() {
            return Err(GuideContentError::NoChapters);
        }

        let chapters = self
            .chapters
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| GuideContentError::Chapter { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let populated = chapters.len();
        let planned = self.planned_chapters.unwrap_or(populated);
        if planned < populated {
            return Err(GuideContentError::PlannedChapters { planned, populated });
        }

        Ok(GuideContent {
            title,
            intro: IntroContent {
                eyebrow: self.intro.eyebrow,
                heading: self.intro.heading,
                body_markdown: self.intro.body_markdown,
                begin_label: self.intro.begin_label,
            },
            chapters,
            planned_chapters: planned,
            pattern_note: PatternNote {
                heading: self.pattern_note.heading,
                observation: self.pattern_note.observation,
                insight: self.pattern_note.insight,
                prompt: self.pattern_note.prompt,
                refine_label: self.pattern_note.refine_label,
                acknowledge_label: self.pattern_note.acknowledge_label,
            },
            answer_placeholder: self.answer_placeholder,
            footer_hint: self.footer_hint,
            speech_hint: self.speech_hint,
        })
    }
}

impl GuideContent {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn intro(&self) -> &IntroContent {
        &self.intro
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Chapter count announced by the step indicator.
    #[must_use]
    pub fn planned_chapters(&self) -> usize {
        self.planned_chapters
    }

    #[must_use]
    pub fn pattern_note(&self) -> &PatternNote {
        &self.pattern_note
    }

    #[must_use]
    pub fn answer_placeholder(&self) -> &str {
        &self.answer_placeholder
    }

    #[must_use]
    pub fn footer_hint(&self) -> &str {
        &self.footer_hint
    }

    #[must_use]
    pub fn speech_hint(&self) -> &str {
        &self.speech_hint
    }
}

fn default_icon() -> String {
    "scan".to_string()
}

fn default_begin_label() -> String {
    "Begin".to_string()
}

fn default_refine_label() -> String {
    "Continue Reflecting".to_string()
}

fn default_acknowledge_label() -> String {
    "Correct, Proceed".to_string()
}

fn default_answer_placeholder() -> String {
    "Share your reflection...".to_string()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
