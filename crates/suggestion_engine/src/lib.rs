//! Suggestion engine: completion-service IO, response validation and the
//! background worker that executes retrieval effects.
mod client;
mod config;
mod engine;
mod parse;
mod prompt;
mod service;
mod types;
mod wire;

pub use client::SuggestionClient;
pub use config::{ClientSettings, ConfigError, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use parse::parse_suggestions;
pub use prompt::build_instruction;
pub use service::{CompletionService, ReqwestCompletionService};
pub use types::{EngineEvent, FailureKind, RequestId, Suggestion, SuggestionError, Suggestions};
