use std::path::{Path, PathBuf};

use reflect_core::model::{GuideContent, GuideContentDraft};

use crate::error::ContentError;

const BUILTIN_GUIDE: &str = include_str!("../assets/purpose_guide.json");

/// Where the guide content comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContentSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl ContentSource {
    /// # Errors
    ///
    /// Returns `ContentError` if the file cannot be read, parsed or validated.
    pub fn load(&self) -> Result<GuideContent, ContentError> {
        match self {
            ContentSource::Builtin => builtin_guide(),
            ContentSource::File(path) => load_guide(path),
        }
    }
}

/// The shipped "Attraction + Pull" guide.
///
/// # Errors
///
/// Returns `ContentError` only if the embedded JSON is malformed.
pub fn builtin_guide() -> Result<GuideContent, ContentError> {
    parse_guide(BUILTIN_GUIDE)
}

/// # Errors
///
/// Returns `ContentError::Io` if the file cannot be read, otherwise as `parse_guide`.
pub fn load_guide(path: &Path) -> Result<GuideContent, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_guide(&raw)
}

/// # Errors
///
/// Returns `ContentError::Json` for malformed JSON and `ContentError::Invalid`
/// when the content fails validation.
pub fn parse_guide(json: &str) -> Result<GuideContent, ContentError> {
    let draft: GuideContentDraft = serde_json::from_str(json)?;
    Ok(draft.validate()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflect_core::model::GuideContentError;
    use std::io::Write;

    #[test]
    fn builtin_guide_has_one_chapter_of_twelve() {
        let guide = builtin_guide().unwrap();

        assert_eq!(guide.title(), "Purpose Guide");
        assert_eq!(guide.chapters().len(), 1);
        assert_eq!(guide.chapters()[0].title(), "Attraction + Pull");
        assert_eq!(guide.chapters()[0].len(), 12);
        assert_eq!(guide.planned_chapters(), 15);
        assert_eq!(guide.pattern_note().heading, "Pattern Identified");
    }

    #[test]
    fn load_guide_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "title": "Short",
                "intro": {{ "heading": "Hello" }},
                "chapters": [{{ "title": "One", "questions": ["Why?", "How?"] }}],
                "pattern_note": {{ "heading": "Noted" }}
            }}"#
        )
        .unwrap();

        let guide = ContentSource::File(file.path().to_path_buf()).load().unwrap();

        assert_eq!(guide.title(), "Short");
        assert_eq!(guide.chapters()[0].len(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_guide(Path::new("/definitely/not/here.json")).unwrap_err();
        match err {
            ContentError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(parse_guide("{ not json"), Err(ContentError::Json(_))));
    }

    #[test]
    fn invalid_content_is_rejected() {
        let err = parse_guide(
            r#"{
                "title": "Guide",
                "intro": { "heading": "Hello" },
                "chapters": [],
                "pattern_note": { "heading": "Noted" }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContentError::Invalid(GuideContentError::NoChapters)
        ));
    }
}
