use std::fmt;

use serde::Deserialize;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Suggestions {
    pub video_channels: Vec<Suggestion>,
    pub forums: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SuggestionsFetched {
        request_id: RequestId,
        result: Result<Suggestions, SuggestionError>,
    },
}

/// A classified failure plus operator-facing detail.
///
/// `message` may contain status lines and payload snippets; it is meant for
/// logs, never for the rendered view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SuggestionError {
    pub kind: FailureKind,
    pub message: String,
}

impl SuggestionError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Everything except the empty-selection gate counts as a retrieval failure.
    pub fn is_retrieval_failure(&self) -> bool {
        self.kind != FailureKind::NoSelection
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NoSelection,
    MissingCredential,
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::NoSelection => write!(f, "no interests selected"),
            FailureKind::MissingCredential => write!(f, "missing service credential"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}
