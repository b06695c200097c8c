use serde::Deserialize;

use crate::{FailureKind, Suggestion, SuggestionError, Suggestions};

const SNIPPET_CHARS: usize = 200;

/// Reply schema: the two arrays, each entry with string `name`/`url`.
///
/// Every accepted spelling is its own field so a reply carrying more than one
/// of them still parses; the first present spelling in declaration order wins.
#[derive(Debug, Deserialize)]
struct SuggestionPayload {
    youtube: Option<Vec<Suggestion>>,
    #[serde(rename = "videoChannels")]
    video_channels_camel: Option<Vec<Suggestion>>,
    video_channels: Option<Vec<Suggestion>>,
    reddit: Option<Vec<Suggestion>>,
    forums: Option<Vec<Suggestion>>,
}

/// Parses the completion text and validates it against the reply schema.
///
/// Any mismatch is a `MalformedResponse` carrying the parser message and a
/// truncated copy of the payload for the log.
pub fn parse_suggestions(content: &str) -> Result<Suggestions, SuggestionError> {
    let payload: SuggestionPayload = serde_json::from_str(content).map_err(|err| {
        SuggestionError::new(
            FailureKind::MalformedResponse,
            format!("{err}; payload: {}", snippet(content)),
        )
    })?;

    let video_channels = payload
        .youtube
        .or(payload.video_channels_camel)
        .or(payload.video_channels)
        .ok_or_else(|| missing_array("youtube", content))?;
    let forums = payload
        .reddit
        .or(payload.forums)
        .ok_or_else(|| missing_array("reddit", content))?;

    Ok(Suggestions {
        video_channels,
        forums,
    })
}

fn missing_array(name: &str, content: &str) -> SuggestionError {
    SuggestionError::new(
        FailureKind::MalformedResponse,
        format!("missing `{name}` array; payload: {}", snippet(content)),
    )
}

/// First `SNIPPET_CHARS` characters of `text`, respecting char boundaries.
pub(crate) fn snippet(text: &str) -> String {
    match text.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, url: &str) -> Suggestion {
        Suggestion {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn reply_with_several_spellings_prefers_the_requested_names() {
        let parsed = parse_suggestions(
            r#"{"youtube":[{"name":"A","url":"http://a"}],"videoChannels":[],"reddit":[],"forums":[{"name":"B","url":"http://b"}],"note":"x"}"#,
        )
        .expect("parses");

        assert_eq!(parsed.video_channels, vec![item("A", "http://a")]);
        assert!(parsed.forums.is_empty());
    }

    #[test]
    fn fallback_spellings_are_used_in_order() {
        let parsed = parse_suggestions(
            r#"{"video_channels":[{"name":"S","url":"http://s"}],"videoChannels":[{"name":"C","url":"http://c"}],"forums":[]}"#,
        )
        .expect("parses");

        assert_eq!(parsed.video_channels, vec![item("C", "http://c")]);
    }

    #[test]
    fn missing_category_is_malformed() {
        let err = parse_suggestions(r#"{"videoChannels":[],"note":"x"}"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedResponse);
        assert!(err.message.contains("`reddit`"));

        let err = parse_suggestions(r#"{"youtube":[{"name":"A"}],"reddit":[]}"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedResponse);
    }

    #[test]
    fn snippet_truncates_on_char_boundary() {
        let long = "é".repeat(SNIPPET_CHARS + 5);
        let cut = snippet(&long);
        assert_eq!(cut.chars().count(), SNIPPET_CHARS + 1);
        assert!(cut.ends_with('…'));
        assert_eq!(snippet("short"), "short");
    }
}
