#![forbid(unsafe_code)]

pub mod content;
pub mod error;
pub mod notify;
pub mod reflection;

pub use reflect_core::Clock;

pub use content::{ContentSource, builtin_guide, load_guide, parse_guide};
pub use error::{ContentError, NotifyError, ReflectionError};
pub use notify::{CompletionNotifier, InMemoryNotifier, JsonLinesNotifier, LogNotifier};
pub use reflection::{
    AcknowledgeOutcome, CompletionEntry, CompletionReport, ReflectionService, ReflectionSession,
};
