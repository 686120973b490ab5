mod answers;
mod guide;
mod ids;

pub use answers::{AnswerKey, AnswerStore};
pub use guide::{
    Chapter, ChapterDraft, ChapterError, GuideContent, GuideContentDraft, GuideContentError,
    IntroContent, IntroDraft, PatternNote, PatternNoteDraft, Question, QuestionError,
};
pub use ids::SessionId;
