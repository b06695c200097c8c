use std::sync::Arc;

use suggestion_logging::{suggest_debug, suggest_info, suggest_warn};

use crate::{
    build_instruction, parse_suggestions, ClientSettings, CompletionService, FailureKind,
    ReqwestCompletionService, SuggestionError, Suggestions,
};

/// Turns a selection into categorized suggestions with exactly one service call.
///
/// No queueing happens here; callers keep at most one fetch in flight.
#[derive(Clone)]
pub struct SuggestionClient {
    service: Arc<dyn CompletionService>,
}

impl SuggestionClient {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    pub fn from_settings(settings: ClientSettings) -> Result<Self, SuggestionError> {
        let service = ReqwestCompletionService::new(settings)?;
        Ok(Self::new(Arc::new(service)))
    }

    pub async fn fetch_suggestions(&self, tags: &[String]) -> Result<Suggestions, SuggestionError> {
        if tags.is_empty() {
            return Err(SuggestionError::new(
                FailureKind::NoSelection,
                "fetch requested with an empty selection",
            ));
        }

        let instruction = build_instruction(tags);
        suggest_info!("Requesting suggestions for {} interest(s)", tags.len());

        let result = self
            .service
            .complete(&instruction)
            .await
            .and_then(|content| parse_suggestions(&content));

        match &result {
            Ok(suggestions) => suggest_debug!(
                "Received {} video channel(s) and {} forum(s)",
                suggestions.video_channels.len(),
                suggestions.forums.len()
            ),
            Err(err) => suggest_warn!("Suggestion retrieval failed: {}", err),
        }
        result
    }
}
