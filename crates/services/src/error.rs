//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use reflect_core::NavigatorError;
use reflect_core::model::GuideContentError;

/// Errors emitted while loading guide content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read guide content from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("guide content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] GuideContentError),
}

/// Errors emitted by completion notifiers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NotifyError {
    #[error("completion notifier rejected the report: {0}")]
    Rejected(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Errors emitted by reflection session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReflectionError {
    #[error(transparent)]
    Navigator(#[from] NavigatorError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
