use std::sync::Arc;

use reflect_core::Phase;
use services::{CompletionNotifier, CompletionReport, NotifyError};

use super::test_harness::{setup_view_harness, setup_view_harness_with_notifier};
use crate::vm::GuideIntent;

fn answer_all(harness: &mut super::test_harness::ViewHarness, count: usize) {
    for index in 0..count {
        harness.dispatch(GuideIntent::EditDraft(format!("reflection {index}")));
        harness.dispatch(GuideIntent::Advance);
    }
}

#[tokio::test(flavor = "current_thread")]
async fn intro_renders_essay_and_begin_button() {
    let (mut harness, _) = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Discovery of Your Life"), "missing heading in {html}");
    assert!(html.contains("The Initial Call"), "missing step label in {html}");
    assert!(html.contains("Begin Your Journey"), "missing begin in {html}");
    assert!(html.contains("<blockquote>"), "missing rendered quote in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn begin_shows_first_question_with_next_disabled() {
    let (mut harness, _) = setup_view_harness();
    harness.rebuild();

    harness.dispatch(GuideIntent::Begin);
    let html = harness.render();

    assert!(html.contains("Chapter 1 / 15"), "missing step label in {html}");
    assert!(html.contains("1 / 12"), "missing progress in {html}");
    assert!(html.contains("always felt a pull towards"), "missing question in {html}");
    assert!(html.contains("btn--disabled"), "next should be disabled in {html}");
    assert!(!html.contains("guide-back"), "back should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn blank_draft_does_not_advance() {
    let (mut harness, _) = setup_view_harness();
    harness.rebuild();
    harness.dispatch(GuideIntent::Begin);

    harness.dispatch(GuideIntent::EditDraft("   ".to_string()));
    harness.dispatch(GuideIntent::Advance);

    let index = harness.with_vm(|vm| vm.snapshot().question_index);
    assert_eq!(index, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn back_restores_committed_answer() {
    let (mut harness, _) = setup_view_harness();
    harness.rebuild();
    harness.dispatch(GuideIntent::Begin);
    harness.dispatch(GuideIntent::EditDraft("I love puzzles".to_string()));
    harness.dispatch(GuideIntent::Advance);

    let html = harness.render();
    assert!(html.contains("2 / 12"), "missing progress in {html}");
    assert!(html.contains("guide-back"), "missing back button in {html}");

    harness.dispatch(GuideIntent::Retreat);
    let html = harness.render();
    assert!(html.contains("I love puzzles"), "missing restored draft in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn last_answer_shows_pattern_note_and_acknowledge_reports() {
    let (mut harness, notifier) = setup_view_harness();
    harness.rebuild();
    harness.dispatch(GuideIntent::Begin);
    answer_all(&mut harness, 12);

    let html = harness.render();
    assert!(html.contains("Pattern Identified"), "missing note in {html}");
    assert_eq!(harness.with_vm(|vm| vm.phase()), Phase::Summary);

    harness.dispatch(GuideIntent::Acknowledge);
    let html = harness.render();
    assert!(html.contains("Proceeding with 12 reflections."), "missing notice in {html}");

    let reports = notifier.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].entries.len(), 12);
}

#[tokio::test(flavor = "current_thread")]
async fn refine_returns_to_last_question() {
    let (mut harness, _) = setup_view_harness();
    harness.rebuild();
    harness.dispatch(GuideIntent::Begin);
    answer_all(&mut harness, 12);

    harness.dispatch(GuideIntent::Refine);
    let html = harness.render();

    assert!(html.contains("12 / 12"), "missing progress in {html}");
    assert!(html.contains("Identify Patterns"), "missing final label in {html}");
    assert!(html.contains("reflection 11"), "missing draft in {html}");
}

struct FailingNotifier;

impl CompletionNotifier for FailingNotifier {
    fn session_acknowledged(&self, _report: &CompletionReport) -> Result<(), NotifyError> {
        Err(NotifyError::Rejected("closed".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failed_acknowledge_renders_error_and_retry() {
    let mut harness = setup_view_harness_with_notifier(Arc::new(FailingNotifier));
    harness.rebuild();
    harness.dispatch(GuideIntent::Begin);
    answer_all(&mut harness, 12);

    harness.dispatch(GuideIntent::Acknowledge);
    let html = harness.render();

    assert!(html.contains("pass your reflections along"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
