//! Completion boundary: where an acknowledged session is handed off.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::error::NotifyError;
use crate::reflection::CompletionReport;

/// Receives the report when the user acknowledges the pattern note.
pub trait CompletionNotifier: Send + Sync {
    /// # Errors
    ///
    /// Returns `NotifyError` if the report could not be delivered.
    fn session_acknowledged(&self, report: &CompletionReport) -> Result<(), NotifyError>;
}

/// Emits the acknowledgement as a structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl CompletionNotifier for LogNotifier {
    fn session_acknowledged(&self, report: &CompletionReport) -> Result<(), NotifyError> {
        tracing::info!(
            session = %report.session_id,
            answers = report.entries.len(),
            acknowledged_at = %report.acknowledged_at,
            "reflection session acknowledged"
        );
        Ok(())
    }
}

/// Writes each report as one JSON line, e.g. to stdout for a downstream process.
pub struct JsonLinesNotifier<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesNotifier<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// # Errors
    ///
    /// Returns `NotifyError::Rejected` if the writer lock was poisoned.
    pub fn into_inner(self) -> Result<W, NotifyError> {
        self.writer
            .into_inner()
            .map_err(|_| NotifyError::Rejected("writer lock poisoned".to_string()))
    }
}

impl<W: Write + Send> CompletionNotifier for JsonLinesNotifier<W> {
    fn session_acknowledged(&self, report: &CompletionReport) -> Result<(), NotifyError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| NotifyError::Rejected("writer lock poisoned".to_string()))?;
        serde_json::to_writer(&mut *writer, report)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// Keeps every report in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    reports: Arc<Mutex<Vec<CompletionReport>>>,
}

impl InMemoryNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reports(&self) -> Vec<CompletionReport> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }
}

impl CompletionNotifier for InMemoryNotifier {
    fn session_acknowledged(&self, report: &CompletionReport) -> Result<(), NotifyError> {
        self.reports
            .lock()
            .map_err(|_| NotifyError::Rejected("report store lock poisoned".to_string()))?
            .push(report.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::CompletionEntry;
    use reflect_core::model::SessionId;
    use reflect_core::time::fixed_now;

    fn report() -> CompletionReport {
        CompletionReport {
            session_id: SessionId::new_random(),
            started_at: fixed_now(),
            acknowledged_at: fixed_now(),
            entries: vec![CompletionEntry {
                chapter_index: 0,
                question_index: 0,
                chapter_title: "Attraction + Pull".to_string(),
                question: "What pulls you?".to_string(),
                answer: "Puzzles".to_string(),
            }],
        }
    }

    #[test]
    fn json_lines_writes_one_line_per_report() {
        let notifier = JsonLinesNotifier::new(Vec::new());
        let report = report();

        notifier.session_acknowledged(&report).unwrap();
        notifier.session_acknowledged(&report).unwrap();

        let bytes = notifier.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["entries"][0]["answer"], "Puzzles");
        assert_eq!(value["session_id"], report.session_id.to_string());
    }

    #[test]
    fn in_memory_keeps_reports() {
        let notifier = InMemoryNotifier::new();
        notifier.session_acknowledged(&report()).unwrap();
        assert_eq!(notifier.reports().len(), 1);
    }

    #[test]
    fn log_notifier_accepts_reports() {
        assert!(LogNotifier.session_acknowledged(&report()).is_ok());
    }
}
