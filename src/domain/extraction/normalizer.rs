//! Response normalization: fence stripping, object isolation, whitespace
//! collapse.
//!
//! Models wrap their JSON in markdown fences, preface it with commentary,
//! and append sign-offs ("Hope this helps!"). Normalization cuts the text
//! down to the one substring that looks like a JSON object before any
//! parsing is attempted.

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::{ExtractError, ExtractionResult};

static OPENING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^```[a-z]*[ \t]*\r?\n?").expect("valid opening fence pattern"));

static CLOSING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n?[ \t]*```$").expect("valid closing fence pattern"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// An isolated JSON candidate, single-line after whitespace collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Candidate {
    /// A closing brace was found after the opening brace; the span between
    /// them (inclusive) is assumed complete.
    Closed(String),
    /// The text ends before any closing brace; the tail from the opening
    /// brace needs repair before parsing.
    Truncated(String),
}

/// Isolates the JSON-object candidate from raw response text.
///
/// Trims, strips a leading fence (optional case-insensitive language tag)
/// and a trailing fence, then slices from the first `{` to the last `}`.
/// Text around the span, prose before the object and sign-offs after it,
/// is discarded. Fails with [`ExtractError::EmptyCandidate`] when no `{`
/// exists at all.
pub(crate) fn isolate_candidate(raw: &str) -> ExtractionResult<Candidate> {
    let unfenced = strip_fences(raw.trim());

    let start = unfenced.find('{');
    let end = unfenced.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if end > start => Ok(Candidate::Closed(collapse_whitespace(
            &unfenced[start..=end],
        ))),
        (Some(start), _) => Ok(Candidate::Truncated(collapse_whitespace(
            &unfenced[start..],
        ))),
        (None, _) => Err(ExtractError::EmptyCandidate),
    }
}

/// Collapses every whitespace run (spaces, tabs, newlines) to a single
/// space. Control characters inside the payload break strict parsers, so
/// candidates are flattened to one line; the regex fallback reuses this on
/// the whole raw text.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

fn strip_fences(text: &str) -> &str {
    let text = match OPENING_FENCE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    match CLOSING_FENCE.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolates_object_from_json_fence() {
        let raw = "```json\n{\"bio\": \"text\"}\n```";
        assert_eq!(
            isolate_candidate(raw).unwrap(),
            Candidate::Closed("{\"bio\": \"text\"}".to_string())
        );
    }

    #[test]
    fn fence_language_tag_is_case_insensitive() {
        let raw = "```JSON\n{\"a\": 1}\n```";
        assert_eq!(
            isolate_candidate(raw).unwrap(),
            Candidate::Closed("{\"a\": 1}".to_string())
        );
    }

    #[test]
    fn fence_without_language_tag_is_stripped() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(
            isolate_candidate(raw).unwrap(),
            Candidate::Closed("{\"a\": 1}".to_string())
        );
    }

    #[test]
    fn discards_prose_around_the_object() {
        let raw = "Sure! Here is the profile you asked for:\n{\"a\": 1}\nHope this helps!";
        assert_eq!(
            isolate_candidate(raw).unwrap(),
            Candidate::Closed("{\"a\": 1}".to_string())
        );
    }

    #[test]
    fn discards_prose_after_closing_fence() {
        let raw = "```json\n{\"a\": 1}\n```\nLet me know if you need more.";
        // Trailing prose means the closing fence is mid-text; brace slicing
        // still isolates the object.
        assert_eq!(
            isolate_candidate(raw).unwrap(),
            Candidate::Closed("{\"a\": 1}".to_string())
        );
    }

    #[test]
    fn collapses_newlines_inside_the_candidate() {
        let raw = "{\n  \"bio\":\t\"a\n long  story\"\n}";
        assert_eq!(
            isolate_candidate(raw).unwrap(),
            Candidate::Closed("{ \"bio\": \"a long story\" }".to_string())
        );
    }

    #[test]
    fn unterminated_object_is_marked_truncated() {
        let raw = "intro {\"bio\": \"cut off";
        assert_eq!(
            isolate_candidate(raw).unwrap(),
            Candidate::Truncated("{\"bio\": \"cut off".to_string())
        );
    }

    #[test]
    fn closing_brace_before_opening_counts_as_truncated() {
        let raw = "} stray {\"a\": 1";
        assert_eq!(
            isolate_candidate(raw).unwrap(),
            Candidate::Truncated("{\"a\": 1".to_string())
        );
    }

    #[test]
    fn text_without_braces_fails_immediately() {
        assert_eq!(
            isolate_candidate("I could not produce a profile."),
            Err(ExtractError::EmptyCandidate)
        );
        assert_eq!(isolate_candidate(""), Err(ExtractError::EmptyCandidate));
        assert_eq!(isolate_candidate("```json\n```"), Err(ExtractError::EmptyCandidate));
    }

    #[test]
    fn collapse_whitespace_flattens_runs() {
        assert_eq!(collapse_whitespace("a\n\n  b\t\tc"), "a b c");
        assert_eq!(collapse_whitespace("  x  "), " x ");
    }
}
