use thiserror::Error;

use crate::model::{ChapterError, GuideContentError, QuestionError};
use crate::navigation::NavigatorError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Chapter(#[from] ChapterError),
    #[error(transparent)]
    Content(#[from] GuideContentError),
    #[error(transparent)]
    Navigator(#[from] NavigatorError),
}
