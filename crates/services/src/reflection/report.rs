use chrono::{DateTime, Utc};
use serde::Serialize;

use reflect_core::Navigator;
use reflect_core::model::SessionId;

/// One answered question, in the shape handed to the completion boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionEntry {
    pub chapter_index: usize,
    pub question_index: usize,
    pub chapter_title: String,
    pub question: String,
    pub answer: String,
}

/// Everything the user committed before acknowledging the pattern note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionReport {
    pub session_id: SessionId,
    pub started_at: DateTime<Utc>,
    pub acknowledged_at: DateTime<Utc>,
    pub entries: Vec<CompletionEntry>,
}

impl CompletionReport {
    pub(crate) fn from_navigator(
        session_id: SessionId,
        started_at: DateTime<Utc>,
        acknowledged_at: DateTime<Utc>,
        navigator: &Navigator,
    ) -> Self {
        let entries = navigator
            .answers()
            .iter()
            .filter_map(|(key, answer)| {
                let chapter = navigator.chapters().get(key.chapter_index())?;
                let question = chapter.question(key.question_index())?;
                Some(CompletionEntry {
                    chapter_index: key.chapter_index(),
                    question_index: key.question_index(),
                    chapter_title: chapter.title().to_string(),
                    question: question.text().to_string(),
                    answer: answer.to_string(),
                })
            })
            .collect();

        Self {
            session_id,
            started_at,
            acknowledged_at,
            entries,
        }
    }
}
