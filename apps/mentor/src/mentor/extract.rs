//! Best-effort structured-block extraction from free model text.
//!
//! Precondition: the block is taken from the FIRST `{` to the LAST `}`
//! inclusive. Prose that itself contains braces is swallowed into the block;
//! this boundary rule is kept as-is for compatibility with stored replies.
//! Failure mode: `None`, never an error.

use tracing::warn;

use crate::mentor::roadmap::Roadmap;

/// Byte range of the brace-delimited block, if both braces exist in order.
fn block_bounds(text: &str) -> Option<(usize, usize)> {
    let start = text.find('{')?;
    let end = text.rfind('}')? + 1;
    (start < end).then_some((start, end))
}

/// Returns the first-`{`-to-last-`}` span of `text`.
pub fn extract_json_block(text: &str) -> Option<&str> {
    block_bounds(text).map(|(start, end)| &text[start..end])
}

/// Splits `text` into the surrounding prose (block removed) and the block.
pub fn split_json_block(text: &str) -> (String, Option<&str>) {
    match block_bounds(text) {
        Some((start, end)) => {
            let prose = format!("{}{}", &text[..start], &text[end..]);
            (prose, Some(&text[start..end]))
        }
        None => (text.to_string(), None),
    }
}

/// Parses the embedded block as a roadmap. Malformed or absent JSON yields `None`.
pub fn extract_roadmap(text: &str) -> Option<Roadmap> {
    let block = extract_json_block(text)?;
    match Roadmap::parse(block) {
        Ok(roadmap) => Some(roadmap),
        Err(e) => {
            warn!("Reply contained a brace block that is not a roadmap: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_trailing_object() {
        let text = "Here is advice.\n{\"Week 1\": \"Read X\"}";
        let roadmap = extract_roadmap(text).expect("roadmap");
        let expected: Roadmap =
            serde_json::from_value(serde_json::json!({"Week 1": "Read X"})).unwrap();
        assert_eq!(roadmap, expected);
    }

    #[test]
    fn test_broken_json_yields_none() {
        assert!(extract_roadmap("Some {broken json").is_none());
        assert!(extract_roadmap("Some {broken: json}").is_none());
    }

    #[test]
    fn test_no_braces_yields_none() {
        assert_eq!(extract_json_block("plain advice"), None);
        assert!(extract_roadmap("plain advice").is_none());
    }

    #[test]
    fn test_block_spans_first_open_to_last_close() {
        let text = "a {x} b {y} c";
        assert_eq!(extract_json_block(text), Some("{x} b {y}"));
    }

    #[test]
    fn test_reversed_braces_are_not_a_block() {
        assert_eq!(extract_json_block("} then {"), None);
    }

    #[test]
    fn test_split_removes_block_from_prose() {
        let (prose, block) = split_json_block("Start {\"a\": 1} end");
        assert_eq!(prose, "Start  end");
        assert_eq!(block, Some("{\"a\": 1}"));
    }

    #[test]
    fn test_split_without_block_keeps_text() {
        let (prose, block) = split_json_block("Nothing here");
        assert_eq!(prose, "Nothing here");
        assert_eq!(block, None);
    }

    #[test]
    fn test_braces_in_prose_swallow_into_block() {
        // Known limitation: prose braces widen the block and break parsing.
        let text = "Use {curly} style.\n{\"Week 1\": \"Read X\"}";
        assert_eq!(
            extract_json_block(text),
            Some("{curly} style.\n{\"Week 1\": \"Read X\"}")
        );
        assert!(extract_roadmap(text).is_none());
    }
}
