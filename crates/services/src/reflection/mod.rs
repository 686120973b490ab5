mod report;
mod service;
mod session;

pub use report::{CompletionEntry, CompletionReport};
pub use service::{AcknowledgeOutcome, ReflectionService};
pub use session::ReflectionSession;
