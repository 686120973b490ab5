mod guide_vm;
mod markdown_vm;

pub use guide_vm::{
    GuideHeaderVm, GuideIntent, GuideOutcome, GuideScreenVm, GuideVm, IntroVm, PatternNoteVm,
    QuestionCardVm, map_intro, map_pattern_note, map_question_card, start_guide,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
